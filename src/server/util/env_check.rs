//! Inspection of the database URL as written in an env file.
//!
//! Values that were quoted or escaped one time too many still load successfully and
//! only fail once the database connection is attempted. These helpers print the
//! structural properties of the value so the corruption is visible at a glance.

use std::{fmt, path::Path};

/// Env file loaded by the server at startup.
pub const ENV_FILE: &str = ".env.local";

/// Structural properties of a configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueDiagnostics {
    /// First character, `None` for an empty value
    pub first_char: Option<char>,
    /// Last character, `None` for an empty value
    pub last_char: Option<char>,
    /// Whether a single or double quote appears anywhere in the value
    pub includes_quotes: bool,
    /// The value as loaded
    pub value: String,
}

impl ValueDiagnostics {
    /// Collects the diagnostics of `value`
    pub fn inspect(value: &str) -> Self {
        Self {
            first_char: value.chars().next(),
            last_char: value.chars().last(),
            includes_quotes: value.contains('"') || value.contains('\''),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ValueDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |c: Option<char>| c.map(String::from).unwrap_or_default();

        writeln!(f, "First character: {}", show(self.first_char))?;
        writeln!(f, "Last character: {}", show(self.last_char))?;
        writeln!(f, "Includes quotes: {}", self.includes_quotes)?;
        write!(f, "Full value: {}", self.value)
    }
}

/// Reads `key` from the env file at `path` without touching the process environment.
///
/// When the key appears more than once the first occurrence wins, matching how dotenvy
/// applies the file.
pub fn read_env_file_value(
    path: impl AsRef<Path>,
    key: &str,
) -> Result<Option<String>, dotenvy::Error> {
    for item in dotenvy::from_filename_iter(path)? {
        let (name, value) = item?;

        if name == key {
            return Ok(Some(value));
        }
    }

    Ok(None)
}
