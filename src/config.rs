//! Configuration file support for nuget-deptree.
//!
//! Provides YAML-based configuration through `nuget-deptree.config.yml`
//! files, including data structures, file loading, validation, and the
//! layering of file values over built-in defaults.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::adapters::outbound::network::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::application::dto::{OutputFormat, DEFAULT_MAX_CONCURRENCY};
use crate::shared::error::DeptreeError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "nuget-deptree.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub sources: Option<Vec<String>>,
    pub max_concurrency: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub strict: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective run settings after layering the config file over defaults.
///
/// Command-line flags are applied on top by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    /// Source overrides; empty means "read NuGet.config"
    pub sources: Vec<String>,
    pub max_concurrency: usize,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            sources: Vec::new(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            strict: false,
        }
    }
}

impl Settings {
    /// Builds settings from an optional, already validated config file
    pub fn from_config(config: Option<&ConfigFile>) -> Result<Self> {
        let mut settings = Self::default();
        let Some(config) = config else {
            return Ok(settings);
        };

        if let Some(format) = &config.format {
            settings.format = OutputFormat::from_str(format).map_err(anyhow::Error::msg)?;
        }
        if let Some(sources) = &config.sources {
            settings.sources = sources.clone();
        }
        if let Some(max_concurrency) = config.max_concurrency {
            settings.max_concurrency = max_concurrency;
        }
        if let Some(timeout_secs) = config.timeout_secs {
            settings.timeout_secs = timeout_secs;
        }
        if let Some(max_retries) = config.max_retries {
            settings.max_retries = max_retries;
        }
        if let Some(strict) = config.strict {
            settings.strict = strict;
        }

        Ok(settings)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            return Err(invalid(format!(
                "Invalid config: format: {}\n\n💡 Hint: Use 'console' or 'json'.",
                e
            )));
        }
    }

    if config.max_concurrency == Some(0) {
        return Err(invalid(
            "Invalid config: max_concurrency must be at least 1.\n\n\
             💡 Hint: Use 1 for strictly sequential lookups."
                .to_string(),
        ));
    }

    if config.timeout_secs == Some(0) {
        return Err(invalid(
            "Invalid config: timeout_secs must be at least 1.".to_string(),
        ));
    }

    if let Some(ref sources) = config.sources {
        for (i, source) in sources.iter().enumerate() {
            if source.trim().is_empty() {
                return Err(invalid(format!(
                    "Invalid config: sources[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a package source URL (e.g., \"https://api.nuget.org/v3/index.json\").",
                    i
                )));
            }
        }
    }

    Ok(())
}

fn invalid(message: String) -> anyhow::Error {
    DeptreeError::Validation { message }.into()
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: json
sources:
  - https://api.nuget.org/v3/index.json
  - https://nuget.internal.example/v3/index.json
max_concurrency: 4
timeout_secs: 30
max_retries: 5
strict: true
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.sources.as_ref().map(Vec::len), Some(2));
        assert_eq!(config.max_concurrency, Some(4));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.max_retries, Some(5));
        assert_eq!(config.strict, Some(true));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: console\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("console"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: markdown\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid config: format"));
    }

    #[test]
    fn test_zero_concurrency_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "max_concurrency: 0\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DeptreeError>(),
            Some(DeptreeError::Validation { .. })
        ));
        assert!(err.to_string().contains("max_concurrency must be at least 1"));
    }

    #[test]
    fn test_zero_timeout_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "timeout_secs: 0\n");

        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_blank_source_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "sources:\n  - \"  \"\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("sources[0] must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: json
check_cve: true
another_unknown: value
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("check_cve"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_config(None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.format, OutputFormat::Console);
        assert_eq!(settings.max_concurrency, 8);
        assert_eq!(settings.timeout_secs, 10);
        assert_eq!(settings.max_retries, 3);
        assert!(!settings.strict);
        assert!(settings.sources.is_empty());
    }

    #[test]
    fn test_settings_from_partial_config() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            max_concurrency: Some(1),
            ..ConfigFile::default()
        };

        let settings = Settings::from_config(Some(&config)).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.max_concurrency, 1);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
