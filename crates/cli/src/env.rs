use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Variable naming the default alias table.
pub const TABLE_VAR: &str = "NAMETOOLS_TABLE";

/// Environment variables from the process, optionally overlaid by a .env file
#[derive(Debug, Clone)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    pub fn new() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Load variables from a .env file, overriding process values
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read env file {}: {}", path.display(), e))
        })?;

        self.parse_env_content(&content)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Picks the alias table: an explicit path wins over `NAMETOOLS_TABLE`.
    pub fn alias_table(&self, explicit: Option<&str>) -> Result<PathBuf, CliError> {
        explicit
            .or_else(|| self.get(TABLE_VAR))
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .ok_or(CliError::MissingTable)
    }

    fn parse_env_content(&mut self, content: &str) -> Result<(), CliError> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid env file: malformed line {} (expected KEY=VALUE)",
                    line_num + 1
                )));
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::Config(format!(
                    "Invalid env file: empty key at line {}",
                    line_num + 1
                )));
            }

            self.vars
                .insert(key.to_string(), Self::unquote_value(value));
        }

        Ok(())
    }

    fn unquote_value(value: &str) -> String {
        let value = value.trim();

        for quote in ['"', '\''] {
            if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
                return value[1..value.len() - 1].to_string();
            }
        }

        value.to_string()
    }
}

impl Default for EnvManager {
    fn default() -> Self {
        Self::new()
    }
}
