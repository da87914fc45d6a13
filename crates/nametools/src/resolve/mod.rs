//! Matching dataset headers against an alias table.
//!
//! [`get_name_dict`] and [`get_name`] reload the alias file on every call.
//! Build a [`Resolver`] once to reuse a loaded table across many datasets.

mod name_map;

pub use name_map::{NOT_FOUND_SUFFIX, NameMap, is_not_found};

use crate::{alias::AliasTable, error::NameError};
use std::{collections::HashSet, path::Path};
use tracing::debug;

/// How a header is compared with an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Compare the lower-cased forms.
    #[default]
    Insensitive,
    /// Byte-for-byte equality.
    Exact,
}

impl CaseMode {
    fn key(self, name: &str) -> String {
        match self {
            CaseMode::Insensitive => name.to_lowercase(),
            CaseMode::Exact => name.to_string(),
        }
    }

    fn alias_keys(self, aliases: &[String]) -> HashSet<String> {
        aliases.iter().map(|alias| self.key(alias)).collect()
    }
}

/// Resolves dataset headers against an already loaded alias table.
///
/// By default the bulk form ([`Resolver::resolve_all`]) ignores case while the
/// single-field form ([`Resolver::resolve`]) compares exactly.
/// [`Resolver::with_case_mode`] applies one policy to both.
#[derive(Debug, Clone)]
pub struct Resolver {
    table: AliasTable,
    bulk_mode: CaseMode,
    single_mode: CaseMode,
}

impl Resolver {
    pub fn new(table: AliasTable) -> Self {
        Self {
            table,
            bulk_mode: CaseMode::Insensitive,
            single_mode: CaseMode::Exact,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, NameError> {
        Ok(Self::new(AliasTable::load(path)?))
    }

    pub fn with_case_mode(mut self, mode: CaseMode) -> Self {
        self.bulk_mode = mode;
        self.single_mode = mode;
        self
    }

    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    /// Maps every canonical name of the table to the one header matching it.
    ///
    /// Unmatched names map to `<canonical>_not_found`. Two or more matching
    /// headers (duplicates included) fail the whole call.
    pub fn resolve_all<S: AsRef<str>>(&self, headers: &[S]) -> Result<NameMap, NameError> {
        let mut names = NameMap::with_capacity(self.table.len());

        for (canonical, aliases) in self.table.iter() {
            let keys = self.bulk_mode.alias_keys(aliases);
            let mut matches: Vec<String> = headers
                .iter()
                .map(AsRef::as_ref)
                .filter(|header| keys.contains(&self.bulk_mode.key(header)))
                .map(str::to_string)
                .collect();

            let header = match matches.len() {
                0 => None,
                1 => matches.pop(),
                _ => {
                    return Err(NameError::MultipleMatches {
                        canonical: canonical.to_string(),
                        headers: matches,
                    });
                }
            };
            names.insert(canonical, header);
        }

        debug!(
            "Resolved {} of {} canonical names against {} headers",
            names.len() - names.missing().len(),
            names.len(),
            headers.len()
        );

        Ok(names)
    }

    /// Finds the header standing for `canonical`, or `None` if no header matches.
    ///
    /// Repeated headers count once.
    pub fn resolve<S: AsRef<str>>(
        &self,
        canonical: &str,
        headers: &[S],
    ) -> Result<Option<String>, NameError> {
        let aliases = self
            .table
            .aliases(canonical)
            .ok_or_else(|| NameError::UnknownCanonical {
                canonical: canonical.to_string(),
            })?;
        let keys = self.single_mode.alias_keys(aliases);

        let mut seen = HashSet::new();
        let mut matches: Vec<String> = headers
            .iter()
            .map(AsRef::as_ref)
            .filter(|header| keys.contains(&self.single_mode.key(header)))
            .filter(|header| seen.insert(*header))
            .map(str::to_string)
            .collect();

        match matches.len() {
            0 => {
                debug!("No header matches {canonical}");
                Ok(None)
            }
            1 => Ok(matches.pop()),
            _ => Err(NameError::MultipleMatches {
                canonical: canonical.to_string(),
                headers: matches,
            }),
        }
    }
}

/// Loads the alias table at `name_dict` and resolves every canonical name
/// against `headers`, case-insensitively.
///
/// ```no_run
/// let headers = ["Inj1_Dur_ms", "Torque", "qmFuel_gsec"];
/// let name_for = nametools::get_name_dict(&headers, "namedictionary.csv")?;
/// let torque_column = &name_for["TORQUE"];
/// # Ok::<(), nametools::NameError>(())
/// ```
pub fn get_name_dict<S: AsRef<str>>(
    headers: &[S],
    name_dict: impl AsRef<Path>,
) -> Result<NameMap, NameError> {
    Resolver::load(name_dict)?.resolve_all(headers)
}

/// Loads the alias table at `name_dict` and finds the header for one
/// canonical name, comparing case exactly.
pub fn get_name<S: AsRef<str>>(
    canonical: &str,
    headers: &[S],
    name_dict: impl AsRef<Path>,
) -> Result<Option<String>, NameError> {
    Resolver::load(name_dict)?.resolve(canonical, headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn resolver() -> Resolver {
        let table: AliasTable = [
            ("TORQUE", "tq_dyno_nm"),
            ("TORQUE", "Torque"),
            ("SPEED", "spd_dyno_revs"),
            ("SPEED", "dyno_shaft_rpm"),
            ("CO2_BRAKE", "can_emsn_CO2_bsm_gkWh"),
            ("CO2_BRAKE", "bsmCO2Exh_gkWh"),
        ]
        .into_iter()
        .collect();
        Resolver::new(table)
    }

    #[test]
    fn test_resolve_all_one_entry_per_canonical() {
        let names = resolver()
            .resolve_all(&["Inj1_Dur_ms", "Torque", "qmFuel_gsec"])
            .unwrap();

        assert_eq!(names.len(), 3);
        assert_eq!(names.get("TORQUE"), Some("Torque"));
        assert_eq!(names.get("SPEED"), Some("SPEED_not_found"));
        assert_eq!(names.get("CO2_BRAKE"), Some("CO2_BRAKE_not_found"));
        assert_eq!(names.missing(), ["CO2_BRAKE", "SPEED"]);
    }

    #[test]
    fn test_resolve_all_ignores_case_and_keeps_header_spelling() {
        let names = resolver()
            .resolve_all(&["TQ_DYNO_NM", "Dyno_Shaft_RPM"])
            .unwrap();

        assert_eq!(names.get("TORQUE"), Some("TQ_DYNO_NM"));
        assert_eq!(names.get("SPEED"), Some("Dyno_Shaft_RPM"));
    }

    #[test]
    fn test_resolve_all_multiple_matches_lists_all_headers() {
        let err = resolver()
            .resolve_all(&["avg_iTestCA90_CADATDC", "can_emsn_CO2_bsm_gkWh", "bsmCO2Exh_gkWh"])
            .unwrap_err();

        match err {
            NameError::MultipleMatches { canonical, headers } => {
                assert_eq!(canonical, "CO2_BRAKE");
                assert_eq!(headers, ["can_emsn_CO2_bsm_gkWh", "bsmCO2Exh_gkWh"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_all_case_variants_collide() {
        let err = resolver().resolve_all(&["torque", "TORQUE"]).unwrap_err();
        assert!(matches!(
            err,
            NameError::MultipleMatches { ref canonical, ref headers }
                if canonical == "TORQUE" && headers.len() == 2
        ));
    }

    #[test]
    fn test_resolve_all_duplicate_header_is_ambiguous() {
        let err = resolver().resolve_all(&["Torque", "Torque"]).unwrap_err();
        assert!(matches!(err, NameError::MultipleMatches { .. }));
    }

    #[test]
    fn test_resolve_all_empty_headers() {
        let headers: [&str; 0] = [];
        let names = resolver().resolve_all(&headers).unwrap();

        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|(canonical, header)| {
            header == format!("{canonical}{NOT_FOUND_SUFFIX}")
        }));
    }

    #[test]
    fn test_resolve_all_exact_mode() {
        let names = resolver()
            .with_case_mode(CaseMode::Exact)
            .resolve_all(&["torque", "spd_dyno_revs"])
            .unwrap();

        assert!(!names.is_found("TORQUE"));
        assert_eq!(names.get("SPEED"), Some("spd_dyno_revs"));
    }

    #[test]
    fn test_resolve_single_found() {
        let found = resolver()
            .resolve("SPEED", &["Torque", "spd_dyno_revs"])
            .unwrap();
        assert_eq!(found.as_deref(), Some("spd_dyno_revs"));
    }

    #[test]
    fn test_resolve_single_is_case_sensitive_by_default() {
        let found = resolver().resolve("TORQUE", &["torque"]).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_resolve_single_insensitive_mode() {
        let found = resolver()
            .with_case_mode(CaseMode::Insensitive)
            .resolve("TORQUE", &["torque"])
            .unwrap();
        assert_eq!(found.as_deref(), Some("torque"));
    }

    #[test]
    fn test_resolve_single_repeated_header_counts_once() {
        let found = resolver()
            .resolve("TORQUE", &["Torque", "Torque"])
            .unwrap();
        assert_eq!(found.as_deref(), Some("Torque"));
    }

    #[test]
    fn test_resolve_single_multiple_matches() {
        let err = resolver()
            .resolve("TORQUE", &["tq_dyno_nm", "Torque"])
            .unwrap_err();

        match err {
            NameError::MultipleMatches { canonical, headers } => {
                assert_eq!(canonical, "TORQUE");
                assert_eq!(headers, ["tq_dyno_nm", "Torque"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_single_unknown_canonical() {
        let err = resolver().resolve("POWER", &["Torque"]).unwrap_err();
        assert!(matches!(
            err,
            NameError::UnknownCanonical { ref canonical } if canonical == "POWER"
        ));
    }

    #[test]
    fn test_resolve_all_header_spelled_like_fallback_counts_as_found() {
        let table: AliasTable = [("SPEED", "SPEED_not_found"), ("TORQUE", "Torque")]
            .into_iter()
            .collect();

        let names = Resolver::new(table)
            .resolve_all(&["SPEED_not_found"])
            .unwrap();

        assert!(names.is_found("SPEED"));
        assert_eq!(names.get("SPEED"), Some("SPEED_not_found"));
        assert_eq!(names.missing(), ["TORQUE"]);
    }

    #[test]
    fn test_resolve_all_keeps_surrounding_whitespace() {
        let table: AliasTable = [("TORQUE", " Torque ")].into_iter().collect();
        let resolver = Resolver::new(table);

        let padded = resolver.resolve_all(&[" Torque "]).unwrap();
        assert_eq!(padded.get("TORQUE"), Some(" Torque "));

        let bare = resolver.resolve_all(&["Torque"]).unwrap();
        assert!(!bare.is_found("TORQUE"));
    }

    #[test]
    fn test_resolve_accepts_owned_headers() {
        let headers = vec!["Torque".to_string()];
        let names = resolver().resolve_all(&headers).unwrap();
        assert_eq!(names.get("TORQUE"), Some("Torque"));
    }

    #[test]
    #[traced_test]
    fn test_resolve_all_logs_summary() {
        resolver().resolve_all(&["Torque"]).unwrap();
        assert!(logs_contain("Resolved 1 of 3 canonical names against 1 headers"));
    }
}
