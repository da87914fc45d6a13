use crate::error::NameError;
use serde::Serialize;
use std::{
    collections::HashMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use tracing::debug;

/// Canonical field name -> every alias accepted for it, in file order.
///
/// A canonical name only exists once it has at least one alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: HashMap<String, Vec<String>>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Reads an alias table from a `canonical,alias` file.
    ///
    /// Fields are kept exactly as written. Lines that are empty or hold only
    /// whitespace are skipped; any other record without exactly two fields
    /// fails the whole load. The file handle is released before returning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NameError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| NameError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_reader(BufReader::new(file), path)?;
        debug!(
            "Loaded alias table {}: {} canonical names, {} aliases",
            path.display(),
            table.len(),
            table.alias_count()
        );

        Ok(table)
    }

    /// Parses alias records from any reader. `origin` is only used in errors.
    pub fn from_reader<R: Read>(reader: R, origin: &Path) -> Result<Self, NameError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut table = Self::new();
        for record in csv_reader.records() {
            let record = record.map_err(|source| NameError::Csv {
                path: origin.to_path_buf(),
                source,
            })?;

            // The csv reader already drops empty lines; whitespace-only ones
            // come through as a single blank field.
            if record.len() == 1 && record[0].trim().is_empty() {
                continue;
            }

            if record.len() != 2 {
                return Err(NameError::Malformed {
                    path: origin.to_path_buf(),
                    line: record.position().map(|pos| pos.line()).unwrap_or(0),
                    found: record.len(),
                });
            }

            table.insert(&record[0], &record[1]);
        }

        Ok(table)
    }

    /// Appends `alias` to the aliases of `canonical`, creating the entry if needed.
    pub fn insert(&mut self, canonical: impl Into<String>, alias: impl Into<String>) {
        self.entries
            .entry(canonical.into())
            .or_default()
            .push(alias.into());
    }

    pub fn aliases(&self, canonical: &str) -> Option<&[String]> {
        self.entries.get(canonical).map(Vec::as_slice)
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.entries.contains_key(canonical)
    }

    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(canonical, aliases)| (canonical.as_str(), aliases.as_slice()))
    }

    /// Number of canonical names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of alias records, duplicates included.
    pub fn alias_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl<K, V> FromIterator<(K, V)> for AliasTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (canonical, alias) in iter {
            table.insert(canonical, alias);
        }
        table
    }
}
