//! Layered configuration for the TVMaze client
//!
//! Loading precedence (highest wins):
//! 1. Environment variables (TVMAZE_*)
//! 2. TOML config file (if TVMAZE_CONFIG_FILE is set)
//! 3. Built-in defaults

use std::path::Path;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TvMazeError};

/// Public TVMaze API root
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Environment variable naming an optional TOML config file
pub const CONFIG_FILE_ENV: &str = "TVMAZE_CONFIG_FILE";

/// Prefix for environment overrides
const ENV_PREFIX: &str = "TVMAZE_";

/// Configuration for the TVMaze client and show fetcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvMazeConfig {
    /// API root, without a trailing slash (default: https://api.tvmaze.com)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Fail empty search terms with `EmptyTerm` instead of forwarding them
    #[serde(default)]
    pub reject_empty_terms: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("tvmaze-core/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for TvMazeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            reject_empty_terms: false,
        }
    }
}

impl TvMazeConfig {
    /// Request timeout as a Duration for reqwest.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load configuration from defaults, the optional TOML file and the
    /// environment.
    ///
    /// # Errors
    /// Returns `TvMazeError::Config` if `TVMAZE_CONFIG_FILE` names a missing
    /// file, a source cannot be read or parsed, or the merged configuration
    /// fails validation.
    pub fn load() -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var(CONFIG_FILE_ENV) {
            figment = merge_config_file(figment, Path::new(&config_path))?;
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["CONFIG_FILE"]));

        Self::from_figment(figment)
    }

    /// Extract and validate configuration from a prepared figment.
    ///
    /// # Errors
    /// Returns `TvMazeError::Config` on extraction or validation failure.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .map_err(|e| TvMazeError::Config(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Check field constraints.
    ///
    /// # Errors
    /// Returns `TvMazeError::Config` naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(TvMazeError::Config(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(TvMazeError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(TvMazeError::Config("user_agent cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Base URL with any trailing slashes removed.
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Layer a TOML file over `figment`. The file must exist.
fn merge_config_file(figment: Figment, path: &Path) -> Result<Figment> {
    if !path.is_file() {
        return Err(TvMazeError::Config(format!(
            "config file not found: {}",
            path.display()
        )));
    }

    Ok(figment.merge(Toml::file(path)))
}
