use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Defaults read from an optional TOML settings file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    /// Seed for the random source; entropy is used when absent.
    pub(crate) seed: Option<u64>,
    /// Sleep between ticks at the rate the face requests.
    pub(crate) realtime: bool,
    /// Print the hazard layout after every input line.
    pub(crate) reveal: bool,
}

impl Settings {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid settings file at {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse settings toml contents")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(Settings::parse("").expect("parse"), Settings::default());
    }

    #[test]
    fn all_fields_are_read() {
        let settings = Settings::parse("seed = 42\nrealtime = true\nreveal = true\n")
            .expect("parse");
        assert_eq!(
            settings,
            Settings {
                seed: Some(42),
                realtime: true,
                reveal: true,
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::parse("difficulty = \"hard\"").is_err());
    }
}
