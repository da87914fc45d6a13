use serde::Serialize;
use std::{
    collections::{HashMap, HashSet},
    ops::Index,
};

/// Suffix appended to a canonical name when no dataset header matched it.
pub const NOT_FOUND_SUFFIX: &str = "_not_found";

/// Builds the fallback value stored for an unmatched canonical name.
fn not_found(canonical: &str) -> String {
    format!("{canonical}{NOT_FOUND_SUFFIX}")
}

/// Returns true if `value` looks like a "not found" fallback.
///
/// Prefer [`NameMap::is_found`] when the canonical name is known, since a real
/// header may itself end in the suffix.
pub fn is_not_found(value: &str) -> bool {
    value.ends_with(NOT_FOUND_SUFFIX)
}

/// Result of a bulk resolution: canonical name -> header found in the dataset,
/// or `<canonical>_not_found` when nothing matched.
///
/// Holds exactly one entry per canonical name of the alias table it was built from.
/// Unmatched names are tracked separately, so a real header spelled like the
/// fallback still counts as found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameMap {
    names: HashMap<String, String>,
    #[serde(skip)]
    unmatched: HashSet<String>,
}

impl NameMap {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            names: HashMap::with_capacity(capacity),
            unmatched: HashSet::new(),
        }
    }

    /// Stores the matched header, or the fallback when `header` is `None`.
    pub(crate) fn insert(&mut self, canonical: &str, header: Option<String>) {
        let value = match header {
            Some(header) => {
                self.unmatched.remove(canonical);
                header
            }
            None => {
                self.unmatched.insert(canonical.to_string());
                not_found(canonical)
            }
        };
        self.names.insert(canonical.to_string(), value);
    }

    /// Header (or fallback) stored for `canonical`.
    pub fn get(&self, canonical: &str) -> Option<&str> {
        self.names.get(canonical).map(String::as_str)
    }

    /// True when `canonical` resolved to an actual dataset header.
    pub fn is_found(&self, canonical: &str) -> bool {
        self.names.contains_key(canonical) && !self.unmatched.contains(canonical)
    }

    /// Canonical names that did not match any header, sorted.
    pub fn missing(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self.unmatched.iter().map(String::as_str).collect();
        missing.sort_unstable();
        missing
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(|(canonical, header)| (canonical.as_str(), header.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.names
    }
}

impl Index<&str> for NameMap {
    type Output = str;

    fn index(&self, canonical: &str) -> &str {
        match self.names.get(canonical) {
            Some(header) => header,
            None => panic!("canonical name '{canonical}' is not in the alias table"),
        }
    }
}
