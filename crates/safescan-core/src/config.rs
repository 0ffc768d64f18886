use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ENDPOINT, DEFAULT_REVEAL_DELAY_MS};
use crate::error::{Result, ScanError};

/// Settings for talking to the classification service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// URL the image is POSTed to.
    pub endpoint: String,
    /// Request timeout in seconds. `None` leaves the request unbounded.
    pub timeout_secs: Option<u64>,
    /// Delay before score bars animate to their final width.
    pub reveal_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}

impl ClientConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ScanError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ScanError::Config(e.to_string()))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}
