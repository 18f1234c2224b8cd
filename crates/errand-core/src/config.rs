//! Configuration types and loading.
//!
//! Configuration is read from YAML with the following fallback chain:
//!
//! 1. An explicit path (the CLI's `--config`)
//! 2. `./.errand.yml`
//! 3. `$XDG_CONFIG_HOME/errand/errand.yml`
//! 4. Built-in defaults
//!
//! ```yaml
//! routing:
//!   api-key-env: GOOGLE_MAPS_API_KEY
//!   timeout-ms: 10000
//!   travel-mode: driving
//! cache:
//!   ttl-secs: 300
//!   max-entries: 512
//! advisory:
//!   rest-stop-minutes: 90
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigResultExt, ErrandError, Result},
    models::TravelMode,
    routing::RouteCache,
};

const LOCAL_CONFIG_FILE: &str = ".errand.yml";
const USER_CONFIG_FILE: &str = "errand.yml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Routing provider settings
    pub routing: RoutingConfig,

    /// Route cache settings
    pub cache: CacheConfig,

    /// Advisory thresholds
    pub advisory: AdvisoryConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => warn!("Failed to load config from {}: {e}", local_config.display()),
            }
        }

        let user_config = xdg::BaseDirectories::with_prefix("errand").find_config_file(USER_CONFIG_FILE);
        if let Some(user_config) = user_config {
            match Self::load_from_file(&user_config) {
                Ok(config) => return Ok(config),
                Err(e) => warn!("Failed to load config from {}: {e}", user_config.display()),
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ErrandError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Self = serde_yaml::from_str(&content)
            .config_context(&format!("Failed to parse config file {}", path.display()))?;

        info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).config_context("Failed to parse config")
    }
}

/// Routing provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct RoutingConfig {
    /// Directions API endpoint
    pub base_url: String,

    /// Environment variable containing the API key
    pub api_key_env: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// Travel mode requested for every leg
    pub travel_mode: TravelMode,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com/maps/api/directions/json".to_string(),
            api_key_env: "GOOGLE_MAPS_API_KEY".to_string(),
            timeout_ms: 10_000,
            travel_mode: TravelMode::Driving,
        }
    }
}

impl RoutingConfig {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).map_err(|_| ErrandError::Configuration {
            message: format!(
                "Routing API key not found. Set the {} environment variable.",
                self.api_key_env
            ),
        })
    }
}

/// Route cache configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct CacheConfig {
    /// Seconds a cached leg stays valid
    pub ttl_secs: u64,

    /// Maximum number of cached legs
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 300,
            max_entries: 512,
        }
    }
}

impl CacheConfig {
    /// Create an empty route cache with these limits.
    pub fn build(&self) -> Arc<RouteCache> {
        Arc::new(RouteCache::new(
            Duration::from_secs(self.ttl_secs),
            self.max_entries,
        ))
    }
}

/// Advisory configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct AdvisoryConfig {
    /// Continuous driving minutes after which a break is suggested
    pub rest_stop_minutes: u64,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            rest_stop_minutes: 90,
        }
    }
}
