use std::time::Duration;

use eyre::{Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_ENDPOINT, LOG_FILE_PATH};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Configuration {
    pub general: GeneralConfig,
    pub log: LogConfig,
    pub backend: BackendConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Print startup progress to stderr
    pub verbose: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub filters: Vec<LogFilter>,
    pub file: LogFile,
}

/// Overrides the global level for one module path.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LogFilter {
    pub module: String,

    /// Falls back to the global level when unset
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LogFile {
    pub path: String,
    pub append: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL that `/todos` is appended to
    pub endpoint: String,

    /// Per-request timeout. Requests wait forever when unset.
    pub timeout_secs: Option<u64>,
}

impl Configuration {
    /// Rejects settings that would only fail later, on the first request.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.backend.endpoint)
            .map_err(|err| eyre::eyre!("invalid endpoint {:?}: {}", self.backend.endpoint, err))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!(
                "invalid endpoint {:?}: scheme must be http or https",
                self.backend.endpoint
            );
        }
        if self.backend.timeout_secs == Some(0) {
            bail!("backend.timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            filters: vec![],
            file: LogFile::default(),
        }
    }
}

impl Default for LogFile {
    fn default() -> Self {
        Self {
            path: LOG_FILE_PATH.to_string(),
            append: false,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}
