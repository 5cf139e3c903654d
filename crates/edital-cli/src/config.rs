//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use edital_analyzer::AnalyzerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
///
/// ```toml
/// [settings]
/// color = true
/// format = "table"
///
/// [analyzer]
/// cache_url = "sqlite:///var/cache/edital.db"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Analyzer settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".edital").join("config.toml"))
    }

    /// Load the effective configuration.
    ///
    /// Reads `explicit` when given, otherwise the default path if that file
    /// exists, otherwise starts from defaults. `EDITAL_*` environment
    /// variables are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let fallback = Self::path().ok();
        Self::resolve(explicit, fallback.as_deref())?.with_env_overrides()
    }

    /// Pick and read the configuration file, without environment overrides.
    pub fn resolve(explicit: Option<&Path>, fallback: Option<&Path>) -> Result<Self> {
        match (explicit, fallback) {
            (Some(path), _) => Self::from_file(path),
            (None, Some(path)) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Read and validate a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.analyzer.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Apply `EDITAL_*` environment overrides to the analyzer settings.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        self.analyzer = self.analyzer.with_env_overrides()?;
        Ok(self)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.analyzer, AnalyzerConfig::default());
    }

    #[test]
    fn test_default_path() {
        if let Ok(path) = Config::path() {
            assert!(path.ends_with(".edital/config.toml"));
        }
    }

    #[test]
    fn test_explicit_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("explicit.toml");
        let fallback = dir.path().join("fallback.toml");
        fs::write(&explicit, "[settings]\nformat = \"json\"\n").unwrap();
        fs::write(&fallback, "[settings]\ncolor = false\n").unwrap();

        let config = Config::resolve(Some(&explicit), Some(&fallback)).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
    }

    #[test]
    fn test_fallback_file_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join("config.toml");
        fs::write(&fallback, "[analyzer]\ncache_ttl_secs = 60\n").unwrap();

        let config = Config::resolve(None, Some(&fallback)).unwrap();
        assert_eq!(config.analyzer.cache_ttl_secs, 60);
        assert_eq!(config.analyzer.cache_url, "memory://");
    }

    #[test]
    fn test_defaults_when_nothing_exists() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");

        let config = Config::resolve(None, Some(&missing)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::resolve(Some(&missing), None),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_analyzer_settings_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[analyzer]\ninference_timeout_secs = 0\n").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.settings.color = false;
        config.analyzer.enable_cache = false;

        let toml_str = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }
}
