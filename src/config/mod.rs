//! Configuration management.
//!
//! Settings come from an optional TOML file layered under `BIOPAPER_*`
//! environment variables. Nested keys use a double underscore, e.g.
//! `BIOPAPER_EUROPE_PMC__TIMEOUT_SECS=60`.
//!
//! ```toml
//! [europe_pmc]
//! base_url = "https://www.ebi.ac.uk/europepmc/webservices/rest"
//! timeout_secs = 30
//! user_agent = "biopaper-mcp/0.1.0"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::sources::EUROPE_PMC_BASE_URL;
use crate::utils::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// File name probed in the working directory
pub const CONFIG_FILE_NAME: &str = "biopaper-mcp.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "BIOPAPER";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Europe PMC client settings
    #[serde(default)]
    pub europe_pmc: EuropePmcConfig,
}

/// Europe PMC client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EuropePmcConfig {
    /// REST API base URL; `/search` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for EuropePmcConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl EuropePmcConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    EUROPE_PMC_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Load configuration from a file, with environment overrides
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(environment())
        .build()?;

    settings.try_deserialize()
}

/// Get configuration from environment variables and defaults only
pub fn get_config() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .add_source(environment())
        .build()?
        .try_deserialize()
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Find a configuration file in the default locations
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("biopaper-mcp").join("config.toml"))
        .filter(|path| path.is_file())
}
