use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::RegaError;

/// Session configuration module
/// This module handles the client session configuration including loading
/// and validating configuration settings.
/// Represents one client session's configuration; immutable once the
/// client has been built from it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RegaConfig {
    /// Hostname or IP address of the CCU
    pub host: String,

    /// Remote script port
    #[serde(default = "default_port")]
    pub port: u16,

    /// WebUI language used for placeholder translation
    #[serde(default = "default_language")]
    pub language: String,

    /// Skip fetching and applying the placeholder translation table
    #[serde(default)]
    pub disable_translation: bool,

    /// Request timeout in seconds. The device can hang indefinitely on
    /// malformed input, so a timeout is always enforced.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_port() -> u16 {
    8181
}

fn default_language() -> String {
    "de".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl RegaConfig {
    /// Configuration for a host with default port, language and timeout
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: default_port(),
            language: default_language(),
            disable_translation: false,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Set the remote script port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the WebUI language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Enable or disable placeholder translation
    pub fn with_translation_disabled(mut self, disabled: bool) -> Self {
        self.disable_translation = disabled;
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, RegaError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RegaError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| RegaError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants that serde defaults cannot express
    pub fn validate(&self) -> Result<(), RegaError> {
        if self.host.trim().is_empty() {
            return Err(RegaError::Config("host must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(RegaError::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}
