use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading an alias table or resolving headers against it.
#[derive(Debug, Error)]
pub enum NameError {
    /// The alias table file could not be opened.
    #[error("Could not open alias table {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// More than one dataset header aliases the same canonical field.
    #[error("Multiple possible matches for {canonical}: {headers:?}")]
    MultipleMatches {
        canonical: String,
        headers: Vec<String>,
    },

    /// The requested canonical name is not listed in the alias table.
    #[error("Unknown canonical field: {canonical}")]
    UnknownCanonical { canonical: String },

    /// A record of the alias table does not have exactly two fields.
    #[error("Malformed alias record at {}:{line}: expected 2 fields, found {found}", .path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        found: usize,
    },

    /// CSV decoding failed while reading the alias table.
    #[error("Error reading alias table {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl NameError {
    /// Returns the alias table path for errors tied to a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            NameError::FileAccess { path, .. }
            | NameError::Malformed { path, .. }
            | NameError::Csv { path, .. } => Some(path.as_path()),
            NameError::MultipleMatches { .. } | NameError::UnknownCanonical { .. } => None,
        }
    }
}
