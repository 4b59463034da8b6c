use clap::Parser as _;
use heatpump_codes::commands;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

const LOG_FILTER_VARIABLE: &str = "HEATPUMP_CODES_LOG";

#[derive(clap::Parser)]
#[clap(version, about)]
enum Commands {
    Codes(commands::codes::Args),
    Describe(commands::describe::Args),
}

#[derive(thiserror::Error, Debug)]
enum LogFilterError {
    #[error("could not parse the {0} filter {2:?}")]
    Parse(&'static str, #[source] tracing_subscriber::filter::ParseError, String),
    #[error("the {0} filter {1:?} is not valid unicode")]
    NotUnicode(&'static str, std::ffi::OsString),
}

fn end<E: std::error::Error>(r: Result<(), E>) {
    std::process::exit(match r {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            let mut cause = e.source();
            while let Some(e) = cause {
                eprintln!("  because: {e}");
                cause = e.source();
            }
            1
        }
    });
}

fn init_logging() -> Result<(), LogFilterError> {
    let filter_description = match std::env::var(LOG_FILTER_VARIABLE) {
        Ok(description) => description,
        Err(std::env::VarError::NotPresent) => "warn".to_string(),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(LogFilterError::NotUnicode(LOG_FILTER_VARIABLE, raw));
        }
    };
    let filter = filter_description
        .parse::<tracing_subscriber::filter::targets::Targets>()
        .map_err(|e| LogFilterError::Parse(LOG_FILTER_VARIABLE, e, filter_description.clone()))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        return end(Err(e));
    }
    match Commands::parse() {
        Commands::Codes(args) => end(commands::codes::run(args)),
        Commands::Describe(args) => end(commands::describe::run(args)),
    }
}
