//! YAML configuration file support.
//!
//! Lets deployments pin fingerprinting parameters in a file instead of code,
//! so that every process comparing fingerprints agrees on them.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "essay corpus"
//!
//! fingerprint:
//!   kgram_len: 5
//!   window_len: 4
//!   modulo: 9223372036854775807
//!   base: 158
//!   allow_space: false
//! ```
//!
//! Every field under `fingerprint` is optional and falls back to
//! [`FingerprintConfig::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{FingerprintConfig, FingerprintError, Fingerprinter};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WinnowfpConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub fingerprint: FingerprintConfig,
}

impl WinnowfpConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: WinnowfpConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.fingerprint
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("fingerprint: {err}")))
    }

    /// Build the fingerprinter described by the `fingerprint` section.
    pub fn fingerprinter(&self) -> Result<Fingerprinter, FingerprintError> {
        Fingerprinter::new(self.fingerprint)
    }
}

impl Default for WinnowfpConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            fingerprint: FingerprintConfig::default(),
        }
    }
}
