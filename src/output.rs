use std::io::Write as _;
use std::marker::PhantomData;
use std::path::PathBuf;

use csv_core::WriteResult;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Format {
    Table,
    Jsonl,
    Csv,
}

#[derive(clap::Parser)]
#[group(id = "output::Args")]
pub struct Args {
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
    #[arg(long, short='f', value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not open the specified output file at {1:?}")]
    OpenOutputFile(#[source] std::io::Error, PathBuf),
    #[error("could not write data to the output file at {1:?}")]
    WriteFile(#[source] std::io::Error, PathBuf),
    #[error("could not write data to the terminal")]
    WriteStdout(#[source] std::io::Error),
    #[error("could not serialize codes to JSON")]
    SerializeJson(#[source] serde_json::Error),
}

/// A record that can be written out in any of the output formats.
///
/// Table and CSV output use `HEADERS` and `cells`, JSON lines use the `serde` representation.
pub trait Row: serde::Serialize {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl Args {
    pub fn to_output<R: Row>(self) -> Result<Output<R>, Error> {
        let io = match &self.output {
            None => Box::new(std::io::stdout().lock()) as Box<_>,
            Some(path) => Box::new(
                std::fs::OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|e| Error::OpenOutputFile(e, path.clone()))?,
            ) as Box<_>,
        };
        Output::new(self.output, self.format, io)
    }
}

pub struct Output<R> {
    path: Option<PathBuf>,
    io: Box<dyn std::io::Write>,
    formatter: Formatter,
    rows: usize,
    _row: PhantomData<fn(&R)>,
}

enum Formatter {
    Csv,
    Table { comfy: comfy_table::Table },
    Jsonl,
}

impl<R: Row> Output<R> {
    pub fn new(
        path: Option<PathBuf>,
        format: Format,
        io: Box<dyn std::io::Write>,
    ) -> Result<Self, Error> {
        let formatter = match format {
            Format::Table => {
                let mut comfy = comfy_table::Table::new();
                comfy
                    .set_header(R::HEADERS.to_vec())
                    .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
                Formatter::Table { comfy }
            }
            Format::Jsonl => Formatter::Jsonl,
            Format::Csv => Formatter::Csv,
        };
        let mut output = Output { path, io, formatter, rows: 0, _row: PhantomData };
        if let Formatter::Csv = output.formatter {
            output.write_csv_row(R::HEADERS)?;
        }
        Ok(output)
    }

    pub fn row(&mut self, row: &R) -> Result<(), Error> {
        match &mut self.formatter {
            Formatter::Csv => {
                let cells = row.cells();
                self.write_csv_row(&cells)?;
            }
            Formatter::Table { comfy } => {
                comfy.add_row(row.cells());
            }
            Formatter::Jsonl => {
                serde_json::to_writer(&mut self.io, row).map_err(Error::SerializeJson)?;
                writeln!(self.io).map_err(|e| self.write_error(e))?
            }
        }
        self.rows += 1;
        Ok(())
    }

    /// Number of rows written so far, not counting the headers.
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn write_csv_row<V: std::ops::Deref<Target = str>>(
        &mut self,
        values: &[V],
    ) -> Result<(), Error> {
        // Worst case every byte is a quote that needs escaping, plus the surrounding quotes.
        let max_len = 2 + 2 * values.iter().map(|v| v.len()).max().unwrap_or(0);
        let mut output = vec![0; max_len];
        let mut writer = csv_core::Writer::new();
        for (index, value) in values.iter().enumerate() {
            if index != 0 {
                let (WriteResult::InputEmpty, ob) = writer.delimiter(&mut output) else {
                    panic!("csv output buffer is too small for a delimiter");
                };
                self.io.write_all(&output[..ob]).map_err(|e| self.write_error(e))?;
            }
            let (WriteResult::InputEmpty, ib, ob) = writer.field(value.as_bytes(), &mut output)
            else {
                panic!("csv output buffer is too small for a field");
            };
            debug_assert_eq!(value.len(), ib);
            self.io.write_all(&output[..ob]).map_err(|e| self.write_error(e))?;
        }
        let (WriteResult::InputEmpty, ob) = writer.terminator(&mut output) else {
            panic!("csv output buffer is too small for a terminator");
        };
        self.io.write_all(&output[..ob]).map_err(|e| self.write_error(e))
    }

    fn write_error(&self, e: std::io::Error) -> Error {
        match &self.path {
            None => Error::WriteStdout(e),
            Some(p) => Error::WriteFile(e, p.clone()),
        }
    }

    pub fn commit(mut self) -> Result<(), Error> {
        if let Formatter::Table { comfy } = &self.formatter {
            let rendered = format!("{comfy}\n");
            self.io.write_all(rendered.as_bytes()).map_err(|e| self.write_error(e))?;
        }
        self.io.flush().map_err(|e| self.write_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(serde::Serialize)]
    struct Pair {
        code: &'static str,
        text: &'static str,
    }

    impl Row for Pair {
        const HEADERS: &'static [&'static str] = &["Code", "Text"];

        fn cells(&self) -> Vec<String> {
            vec![self.code.to_string(), self.text.to_string()]
        }
    }

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Shared {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn render(format: Format, rows: &[Pair]) -> String {
        let buffer = Shared::default();
        let mut output = Output::<Pair>::new(None, format, Box::new(buffer.clone())).unwrap();
        for row in rows {
            output.row(row).unwrap();
        }
        assert_eq!(output.rows(), rows.len());
        output.commit().unwrap();
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    const ROWS: [Pair; 2] = [
        Pair { code: "I.74", text: "zu niedrig (Unterspannung), Verdichter aus" },
        Pair { code: "S.10", text: "Standby" },
    ];

    #[test]
    fn csv_quotes_fields_with_delimiters() {
        assert_eq!(
            render(Format::Csv, &ROWS),
            "Code,Text\nI.74,\"zu niedrig (Unterspannung), Verdichter aus\"\nS.10,Standby\n"
        );
    }

    #[test]
    fn csv_without_rows_still_has_headers() {
        assert_eq!(render(Format::Csv, &[]), "Code,Text\n");
    }

    #[test]
    fn jsonl_writes_one_object_per_line() {
        let text = render(Format::Jsonl, &ROWS);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], r#"{"code":"S.10","text":"Standby"}"#);
    }

    #[test]
    fn table_has_headers_and_rows() {
        let text = render(Format::Table, &ROWS);
        assert!(text.contains("Code"));
        assert!(text.contains("S.10"));
        assert!(text.contains("Standby"));
    }
}
