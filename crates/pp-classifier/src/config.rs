//! Classifier configuration, loadable from TOML.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

/// Top-level classifier configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifierConfig {
    /// Generative backend settings. Absent section means deterministic only.
    #[serde(default)]
    pub generative: GenerativeConfig,
}

impl ClassifierConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.generative.check()?;
        Ok(config)
    }
}

/// Settings for the Ollama-compatible generative service.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerativeConfig {
    /// Whether the generative path is attempted at all.
    #[serde(default)]
    pub enabled: bool,
    /// Ollama HTTP API base URL.
    #[serde(default = "default_host")]
    pub host: String,
    /// Model to use for classification.
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound for the single outbound call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Plans below this confidence are discarded in favour of the rules.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
}

fn default_host() -> String {
    "http://localhost:11434".into()
}
fn default_model() -> String {
    "phi3:mini".into()
}
fn default_timeout_secs() -> u64 {
    5
}
fn default_min_confidence() -> f64 {
    0.3
}

impl GenerativeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn check(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConfigError::Parse(format!(
                "generative.min_confidence must be within [0, 1], got {}",
                self.min_confidence
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Parse(
                "generative.timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: default_host(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            min_confidence: default_min_confidence(),
        }
    }
}
