//! Configuration loading and parsing for `config.toml`.
//!
//! Every field is optional; a missing file yields the defaults.
use log::*;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    error::{Result, ShipfolderError},
    remote::config::{
        DEFAULT_DEPLOY_BRANCH, DEFAULT_GITHUB_API_URL, DEFAULT_UPLOAD_DELAY_MS,
        DEFAULT_VERCEL_API_URL,
    },
};

/// Directory name under the platform config dir.
pub const APP_DIR_NAME: &str = "shipfolder";
/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Root configuration structure for `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub REST API base URL (GitHub Enterprise: "https://host/api/v3").
    pub github_api_url: String,
    /// Vercel REST API base URL.
    pub vercel_api_url: String,
    /// Pause after each uploaded file, in milliseconds.
    pub upload_delay_ms: u64,
    /// Branch the deployment is built from.
    pub deploy_branch: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            vercel_api_url: DEFAULT_VERCEL_API_URL.to_string(),
            upload_delay_ms: DEFAULT_UPLOAD_DELAY_MS,
            deploy_branch: DEFAULT_DEPLOY_BRANCH.to_string(),
        }
    }
}

impl Config {
    pub fn upload_delay(&self) -> Duration {
        Duration::from_millis(self.upload_delay_ms)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, or from the default location when
    /// `path` is None. An explicit path must exist; the default may not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match default_config_path() {
                Some(path) => (path, false),
                None => return Ok(Config::default()),
            },
        };

        if !path.exists() {
            if required {
                return Err(ShipfolderError::invalid_config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            debug!("no config file at {}: using defaults", path.display());
            return Ok(Config::default());
        }

        debug!("loading config from {}", path.display());
        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("github_api_url", &self.github_api_url),
            ("vercel_api_url", &self.vercel_api_url),
        ] {
            let url = url::Url::parse(value).map_err(|e| {
                ShipfolderError::invalid_config(format!("{key}: {e}"))
            })?;
            if url.scheme() != "https" && url.scheme() != "http" {
                return Err(ShipfolderError::invalid_config(format!(
                    "{key}: only http and https schemes are supported"
                )));
            }
        }

        if self.deploy_branch.trim().is_empty() {
            return Err(ShipfolderError::invalid_config(
                "deploy_branch must not be empty",
            ));
        }

        Ok(())
    }
}

/// Per-user application directory, e.g. `~/.config/shipfolder`.
pub fn app_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

pub fn default_config_path() -> Option<PathBuf> {
    app_config_dir().map(|dir| dir.join(DEFAULT_CONFIG_FILE))
}
