//! Configuration for the Analyzer

use crate::error::AnalyzerError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Longest accepted cache TTL (one year)
pub const MAX_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Configuration for the Analyzer
///
/// Every key is optional in TOML; missing keys take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Language model identifier (`pt_core_heuristic`, `onnx:<dir>`)
    pub model_name: String,

    /// Directory holding model assets
    pub model_path: PathBuf,

    /// Cache analysis results
    pub enable_cache: bool,

    /// Cache backend (`memory://`, `sqlite://<path>`)
    pub cache_url: String,

    /// Lifetime of a cached result (seconds)
    pub cache_ttl_secs: u64,

    /// Bound on one cache operation (milliseconds)
    pub cache_timeout_ms: u64,

    /// Bound on one model call (seconds)
    pub inference_timeout_secs: u64,

    /// Minimum entity confidence. Read and validated, but not applied:
    /// every entity carries the same placeholder confidence.
    pub ner_confidence_threshold: f64,

    /// Text longer than this many characters is truncated before entity
    /// recognition
    pub max_text_length: usize,
}

impl AnalyzerConfig {
    /// Cache TTL as a Duration
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Cache operation timeout as a Duration
    pub fn cache_timeout(&self) -> Duration {
        Duration::from_millis(self.cache_timeout_ms)
    }

    /// Inference timeout as a Duration
    pub fn inference_timeout(&self) -> Duration {
        Duration::from_secs(self.inference_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model_name.trim().is_empty() {
            return Err("model_name must not be empty".to_string());
        }
        if self.enable_cache && self.cache_url.trim().is_empty() {
            return Err("cache_url must not be empty when caching is enabled".to_string());
        }
        if self.cache_ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(format!(
                "cache_ttl_secs must be at most {} (one year)",
                MAX_CACHE_TTL_SECS
            ));
        }
        if self.cache_timeout_ms == 0 {
            return Err("cache_timeout_ms must be greater than 0".to_string());
        }
        if self.inference_timeout_secs == 0 {
            return Err("inference_timeout_secs must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.ner_confidence_threshold) {
            return Err("ner_confidence_threshold must be between 0.0 and 1.0".to_string());
        }
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AnalyzerError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AnalyzerError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&contents).map_err(AnalyzerError::Config)?;
        config.validate().map_err(AnalyzerError::Config)?;
        Ok(config)
    }

    /// Apply `EDITAL_*` environment overrides
    pub fn with_env_overrides(self) -> Result<Self, AnalyzerError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, AnalyzerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("EDITAL_MODEL_NAME") {
            self.model_name = value;
        }
        if let Some(value) = lookup("EDITAL_MODEL_PATH") {
            self.model_path = PathBuf::from(value);
        }
        if let Some(value) = lookup("EDITAL_ENABLE_CACHE") {
            self.enable_cache = parse_bool("EDITAL_ENABLE_CACHE", &value)?;
        }
        if let Some(value) = lookup("EDITAL_CACHE_URL") {
            self.cache_url = value;
        }
        if let Some(value) = lookup("EDITAL_CACHE_TTL") {
            self.cache_ttl_secs = parse_number("EDITAL_CACHE_TTL", &value)?;
        }
        if let Some(value) = lookup("EDITAL_MAX_TEXT_LENGTH") {
            self.max_text_length = parse_number("EDITAL_MAX_TEXT_LENGTH", &value)?;
        }
        self.validate().map_err(AnalyzerError::Config)?;
        Ok(self)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model_name: edital_ner::HEURISTIC_MODEL_NAME.to_string(),
            model_path: PathBuf::from("models"),
            enable_cache: true,
            cache_url: "memory://".to_string(),
            cache_ttl_secs: 3600,
            cache_timeout_ms: 500,
            inference_timeout_secs: 30,
            ner_confidence_threshold: 0.5,
            max_text_length: edital_ner::DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, AnalyzerError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AnalyzerError::Config(format!(
            "{key} must be a boolean, got '{value}'"
        ))),
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, AnalyzerError> {
    value
        .trim()
        .parse()
        .map_err(|_| AnalyzerError::Config(format!("{key} must be a number, got '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.model_name, "pt_core_heuristic");
        assert_eq!(config.cache_ttl(), Duration::from_secs(3600));
        assert_eq!(config.cache_timeout(), Duration::from_millis(500));
        assert_eq!(config.inference_timeout(), Duration::from_secs(30));
        assert_eq!(config.max_text_length, 1_000_000);
    }

    #[test]
    fn test_validation_catches_invalid_values() {
        let mut config = AnalyzerConfig::default();
        config.inference_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = AnalyzerConfig::default();
        config.ner_confidence_threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = AnalyzerConfig::default();
        config.cache_url = String::new();
        assert!(config.validate().is_err());
        config.enable_cache = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalyzerConfig {
            cache_url: "sqlite://cache.db".to_string(),
            cache_ttl_secs: 60,
            ..Default::default()
        };
        let toml_str = config.to_toml().unwrap();
        assert_eq!(AnalyzerConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AnalyzerConfig::from_toml("enable_cache = false\n").unwrap();
        assert!(!config.enable_cache);
        assert_eq!(config.cache_ttl_secs, 3600);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edital.toml");
        std::fs::write(&path, "cache_ttl_secs = 120\nmodel_name = \"heuristic\"\n").unwrap();

        let config = AnalyzerConfig::from_file(&path).unwrap();
        assert_eq!(config.cache_ttl_secs, 120);
        assert_eq!(config.model_name, "heuristic");

        std::fs::write(&path, "inference_timeout_secs = 0\n").unwrap();
        assert!(matches!(
            AnalyzerConfig::from_file(&path),
            Err(AnalyzerError::Config(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("EDITAL_ENABLE_CACHE", "false"),
            ("EDITAL_CACHE_TTL", "90"),
            ("EDITAL_MAX_TEXT_LENGTH", "5000"),
            ("EDITAL_CACHE_URL", "sqlite://:memory:"),
        ]
        .into_iter()
        .collect();

        let config = AnalyzerConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert!(!config.enable_cache);
        assert_eq!(config.cache_ttl_secs, 90);
        assert_eq!(config.max_text_length, 5000);
        assert_eq!(config.cache_url, "sqlite://:memory:");
    }

    #[test]
    fn test_cache_ttl_upper_bound() {
        let mut config = AnalyzerConfig::default();
        config.cache_ttl_secs = MAX_CACHE_TTL_SECS;
        assert!(config.validate().is_ok());
        config.cache_ttl_secs = MAX_CACHE_TTL_SECS + 1;
        assert!(config.validate().is_err());

        let result = AnalyzerConfig::default().with_overrides(|key| {
            (key == "EDITAL_CACHE_TTL").then(|| u64::MAX.to_string())
        });
        assert!(matches!(result, Err(AnalyzerError::Config(_))));
    }

    #[test]
    fn test_bad_override_is_config_error() {
        let result = AnalyzerConfig::default().with_overrides(|key| {
            (key == "EDITAL_CACHE_TTL").then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(AnalyzerError::Config(_))));
    }
}
