use nametools::NameError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to resolve names: {0}")]
    Name(#[from] NameError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset given with `--data` could not be read.
    #[error("Failed to read dataset headers from {path}: {source}")]
    DatasetRead { path: String, source: csv::Error },

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No alias table given: pass --table or set NAMETOOLS_TABLE")]
    MissingTable,

    /// `lookup` found no header for the canonical name.
    #[error("No header found for {name}")]
    HeaderNotFound { name: String },
}
