pub mod codes;
pub mod commands;
pub mod output;

pub use codes::{classify_category, classify_severity, lookup_description};
