//! Configuration for the console.
//!
//! Settings are loaded with priority: env var > default. The only knob is
//! the controller API root; `bootstrap::load_env` makes `.env` files
//! visible before `Config::from_env` runs.

use url::Url;

use crate::error::ConfigError;

/// Env var holding the controller API root URL.
pub const API_ROOT_ENV: &str = "EVC_CONSOLE_API_ROOT";

/// Default controller API root when the env var is unset.
const DEFAULT_API_ROOT: &str = "http://127.0.0.1:8181/api/v1/";

/// Main configuration for the console.
#[derive(Debug, Clone)]
pub struct Config {
    pub controller: ControllerConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            controller: ControllerConfig::from_env()?,
        })
    }
}

/// Remote provisioning controller configuration.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// API root all controller endpoints are joined onto. Always ends
    /// with `/` so joining appends instead of replacing the last segment.
    pub api_root: Url,
}

impl ControllerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = optional_env(API_ROOT_ENV).unwrap_or_else(|| DEFAULT_API_ROOT.to_string());
        Self::from_api_root(&raw)
    }

    /// Build a controller config from a raw API root string.
    pub fn from_api_root(raw: &str) -> Result<Self, ConfigError> {
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };
        let api_root = Url::parse(&normalized).map_err(|e| ConfigError::InvalidValue {
            key: API_ROOT_ENV.to_string(),
            message: format!("invalid URL '{raw}': {e}"),
        })?;
        if api_root.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                key: API_ROOT_ENV.to_string(),
                message: format!("'{raw}' cannot serve as a base URL"),
            });
        }
        Ok(Self { api_root })
    }

    /// Resolved circuit-provisioning endpoint: `<api-root>/evc/`.
    pub fn evc_endpoint(&self) -> Result<Url, ConfigError> {
        self.api_root
            .join("evc/")
            .map_err(|e| ConfigError::InvalidValue {
                key: API_ROOT_ENV.to_string(),
                message: format!("cannot join 'evc/' onto '{}': {e}", self.api_root),
            })
    }
}

/// Read an env var, treating unset and whitespace-only values as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
