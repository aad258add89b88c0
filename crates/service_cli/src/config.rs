//! CLI configuration management.
//!
//! Handles loading of `vantage.toml` with environment variable override
//! support. Every field has a default, so an absent file or an empty one
//! gives a usable configuration.

use pricer_risk::parallel::{ParallelConfig, DEFAULT_BATCH_SIZE, DEFAULT_PARALLEL_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Key/value table
    Table,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            other => Err(format!("unknown output format '{}' (json, table)", other)),
        }
    }
}

/// VaR defaults used when a command does not pass them explicitly.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct VarSettings {
    /// Confidence level
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    /// Holding period in days
    #[serde(default = "default_horizon_days")]
    pub horizon_days: f64,
}

impl Default for VarSettings {
    fn default() -> Self {
        Self {
            confidence: default_confidence(),
            horizon_days: default_horizon_days(),
        }
    }
}

/// Rayon fan-out policy.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct ParallelSettings {
    /// Minimum item count before going parallel
    #[serde(default = "default_threshold")]
    pub threshold: usize,
    /// Minimum chunk per worker
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for ParallelSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            batch_size: default_batch_size(),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CliConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// VaR defaults
    #[serde(default)]
    pub var: VarSettings,

    /// Parallel policy
    #[serde(default)]
    pub parallel: ParallelSettings,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_confidence() -> f64 {
    0.95
}

fn default_horizon_days() -> f64 {
    1.0
}

fn default_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output_format: OutputFormat::default(),
            var: VarSettings::default(),
            parallel: ParallelSettings::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unparseable numeric values leave the field unchanged; `validate`
    /// reports anything out of range.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("VANTAGE_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(format) = lookup("VANTAGE_OUTPUT_FORMAT") {
            self.output_format = format.parse().unwrap_or(self.output_format);
        }

        if let Some(confidence) = lookup("VANTAGE_VAR_CONFIDENCE") {
            self.var.confidence = confidence.parse().unwrap_or(self.var.confidence);
        }

        if let Some(days) = lookup("VANTAGE_VAR_HORIZON_DAYS") {
            self.var.horizon_days = days.parse().unwrap_or(self.var.horizon_days);
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        let c = self.var.confidence;
        if !(c.is_finite() && c > 0.0 && c < 1.0) {
            errors.push(format!("var.confidence {} must lie strictly between 0 and 1", c));
        }

        let h = self.var.horizon_days;
        if !(h.is_finite() && h >= 0.0) {
            errors.push(format!("var.horizon_days {} must be non-negative", h));
        }

        if self.parallel.batch_size == 0 {
            errors.push("parallel.batch_size must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Rayon policy for the risk engine.
    pub fn parallel_config(&self) -> ParallelConfig {
        ParallelConfig::new(self.parallel.batch_size, self.parallel.threshold)
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.var.confidence, 0.95);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "output_format = \"table\"\n\n[var]\nhorizon_days = 10.0\n\n[parallel]\nthreshold = 8"
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.var.horizon_days, 10.0);
        assert_eq!(config.var.confidence, 0.95);
        assert_eq!(config.parallel.threshold, 8);
        assert_eq!(config.parallel.batch_size, DEFAULT_BATCH_SIZE);
        assert!(config.parallel_config().should_parallelize(8));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output_format = \"xml\"").unwrap();
        assert!(matches!(
            CliConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = CliConfig::load_or_default(Path::new("/nonexistent/vantage.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("VANTAGE_LOG_LEVEL", "debug"),
            ("VANTAGE_OUTPUT_FORMAT", "TABLE"),
            ("VANTAGE_VAR_CONFIDENCE", "0.99"),
            ("VANTAGE_VAR_HORIZON_DAYS", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let config =
            CliConfig::default().with_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.var.confidence, 0.99);
        assert_eq!(config.var.horizon_days, 1.0);
    }

    #[test]
    fn test_validate_collects_errors() {
        let mut config = CliConfig::default();
        config.log_level = "loud".to_string();
        config.var.confidence = 1.5;
        config.parallel.batch_size = 0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation errors, got {:?}", other),
        }
    }
}
