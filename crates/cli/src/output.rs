use crate::error::CliError;
use nametools::{AliasTable, NameMap};

pub fn write_names(names: &NameMap, path: &str) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(names)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn print_names(names: &NameMap, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(names)?);
        return Ok(());
    }

    for (canonical, header) in sorted(names.iter()) {
        let status = if names.is_found(canonical) {
            ""
        } else {
            "  (not found)"
        };
        println!("{canonical:<24} {header}{status}");
    }
    Ok(())
}

pub fn print_table(table: &AliasTable, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(table)?);
        return Ok(());
    }

    for (canonical, aliases) in sorted(table.iter()) {
        println!("{canonical:<24} {}", aliases.join(", "));
    }
    Ok(())
}

/// Canonical names come out of hash maps; sort them for stable output.
fn sorted<'a, T>(entries: impl Iterator<Item = (&'a str, T)>) -> Vec<(&'a str, T)> {
    let mut entries: Vec<_> = entries.collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
