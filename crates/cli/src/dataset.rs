use crate::error::CliError;
use tracing::debug;

/// Reads only the header row of a CSV dataset.
pub fn read_headers(path: &str) -> Result<Vec<String>, CliError> {
    let to_error = |source| CliError::DatasetRead {
        path: path.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(to_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(to_error)?
        .iter()
        .map(str::to_string)
        .collect();

    debug!("Read {} headers from {}", headers.len(), path);
    Ok(headers)
}
