use crate::engine::currency::{CodeValidator, KnownCodes};
use log::warn;
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read runtime config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse runtime config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Appended to the input file stem to name the report
    pub output_suffix: String,
    /// Codes accepted in addition to ISO 4217
    pub extra_currency_codes: Vec<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig::new()
    }
}

/// Report suffix used when the configured one is empty
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_result";

impl RuntimeConfig {
    pub fn new() -> Self {
        RuntimeConfig {
            log_level: "info".to_string(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            extra_currency_codes: Vec::new(),
        }
    }

    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replaces settings that cannot be used as given. An empty
    /// `output_suffix` would name the report after the input file.
    pub fn normalized(mut self) -> Self {
        if self.output_suffix.trim().is_empty() {
            warn!(
                "output_suffix must not be empty, using {:?}",
                DEFAULT_OUTPUT_SUFFIX
            );
            self.output_suffix = DEFAULT_OUTPUT_SUFFIX.to_string();
        }
        self
    }

    pub fn code_validator(&self) -> CodeValidator {
        CodeValidator::new(KnownCodes::iso4217().with_extra_codes(&self.extra_currency_codes))
    }

    /// `<dir>/<stem><output_suffix>.csv` next to the input file
    pub fn report_path_for(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        input.with_file_name(format!("{}{}.csv", stem, self.output_suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();
        writeln!(file, "extra_currency_codes = [\"BTC\"]").unwrap();

        let config = RuntimeConfig::from_toml(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output_suffix, "_result");
        assert_eq!(config.extra_currency_codes, vec!["BTC"]);
        assert!(config.code_validator().find_currency_pair("BTC/EUR"));
    }

    #[test]
    fn test_from_toml_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            RuntimeConfig::from_toml(dir.path().join("config.toml")),
            Err(ConfigError::Read { .. })
        ));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = [").unwrap();
        assert!(matches!(
            RuntimeConfig::from_toml(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_normalized_restores_empty_suffix() {
        let mut config = RuntimeConfig::new();
        config.output_suffix = String::new();
        let config = config.normalized();
        assert_eq!(config.output_suffix, DEFAULT_OUTPUT_SUFFIX);
        assert_ne!(
            config.report_path_for(Path::new("orders.csv")),
            PathBuf::from("orders.csv")
        );

        let mut custom = RuntimeConfig::new();
        custom.output_suffix = "_matched".to_string();
        assert_eq!(custom.clone().normalized(), custom);
    }

    #[test]
    fn test_report_path_for() {
        let config = RuntimeConfig::new();
        assert_eq!(
            config.report_path_for(Path::new("data/orders.csv")),
            PathBuf::from("data/orders_result.csv")
        );
    }
}
