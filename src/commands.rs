use crate::codes::{Category, CodeEntry};
use crate::output::Row;

impl Row for CodeEntry {
    const HEADERS: &'static [&'static str] = &["Code", "Category", "Severity", "Description"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.code.to_string(),
            self.category.to_string(),
            self.severity.to_string(),
            self.description.to_string(),
        ]
    }
}

pub mod codes {
    use super::*;
    use crate::output;

    /// List and search the known diagnostic codes.
    #[derive(clap::Parser)]
    pub struct Args {
        /// Only show codes whose code or description contains this text.
        filter: Option<String>,
        /// Only show codes of this category.
        #[arg(long, short = 'c', value_enum)]
        category: Option<Category>,
        #[command(flatten)]
        output: output::Args,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not output the code list")]
        Output(#[from] output::Error),
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let mut output = args.output.to_output::<CodeEntry>()?;
        let entries = CodeEntry::all()
            .filter(|e| args.category.map_or(true, |c| e.category == c))
            .filter(|e| args.filter.as_deref().map_or(true, |p| e.is_match(p)));
        for entry in entries {
            output.row(&entry)?;
        }
        tracing::debug!(rows = output.rows(), "listed codes");
        Ok(output.commit()?)
    }
}

pub mod describe {
    use crate::codes::{classify_category, classify_severity, lookup_description, normalize};
    use crate::output::{self, Row};

    /// Describe diagnostic codes as reported by the heat pump.
    #[derive(clap::Parser)]
    pub struct Args {
        /// Codes such as `S.10` or `f.01`. Case and surrounding whitespace do not matter.
        #[arg(required = true)]
        codes: Vec<String>,
        #[command(flatten)]
        output: output::Args,
    }

    #[derive(thiserror::Error, Debug)]
    pub enum Error {
        #[error("could not output the code descriptions")]
        Output(#[from] output::Error),
    }

    #[derive(serde::Serialize)]
    pub struct Description {
        pub code: String,
        pub category: &'static str,
        pub severity: &'static str,
        pub description: String,
    }

    impl Description {
        pub fn of(code: &str) -> Self {
            Self {
                code: normalize(code),
                category: classify_category(code),
                severity: classify_severity(code),
                description: lookup_description(code).into_owned(),
            }
        }
    }

    impl Row for Description {
        const HEADERS: &'static [&'static str] = &["Code", "Category", "Severity", "Description"];

        fn cells(&self) -> Vec<String> {
            vec![
                self.code.clone(),
                self.category.to_string(),
                self.severity.to_string(),
                self.description.clone(),
            ]
        }
    }

    pub fn run(args: Args) -> Result<(), Error> {
        let mut output = args.output.to_output::<Description>()?;
        for code in &args.codes {
            let description = Description::of(code);
            if description.category == "unknown" {
                tracing::warn!(code = %description.code, "not a heat pump diagnostic code");
            }
            output.row(&description)?;
        }
        Ok(output.commit()?)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn describes_known_and_unknown_codes() {
            let f01 = Description::of(" f.01");
            assert_eq!(f01.code, "F.01");
            assert_eq!(f01.category, "fault");
            assert_eq!(f01.severity, "error");
            assert_eq!(f01.description, "Außentemperatursensor defekt");

            let s999 = Description::of("S.999");
            assert_eq!(s999.severity, "info");
            assert_eq!(s999.description, "S.999 - Unbekannter Statuscode");

            let other = Description::of("x.1");
            assert_eq!(other.cells(), ["X.1", "unknown", "unknown", "X.1"]);
        }
    }
}
