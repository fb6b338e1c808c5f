//! Client configuration.
//!
//! Values come from a TOML file (if one is found) and are then overridden by
//! the environment: `OVERRIDDEN_ENDPOINT` for the endpoint and
//! `TURING_API_KEY` for the API key.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The hosted grading endpoint used when nothing overrides it.
pub const HOSTED_ENDPOINT: &str = "http://18.118.162.4/";

/// Environment variable that overrides the endpoint.
pub const ENDPOINT_ENV: &str = "OVERRIDDEN_ENDPOINT";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "TURING_API_KEY";

/// Connection settings for the grading service.
///
/// Note: Custom Debug impl masks the API key to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Endpoint override. `None` means [`HOSTED_ENDPOINT`].
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    10
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// The endpoint to post to: a non-empty override, else the hosted endpoint.
    pub fn resolved_endpoint(&self) -> String {
        non_empty(self.endpoint.as_deref())
            .unwrap_or(HOSTED_ENDPOINT)
            .to_string()
    }

    /// The API key to send: an explicit non-empty key, else the configured
    /// one, else an empty string.
    pub fn resolved_api_key(&self, explicit: Option<&str>) -> String {
        non_empty(explicit)
            .or_else(|| non_empty(self.api_key.as_deref()))
            .unwrap_or_default()
            .to_string()
    }

    /// Configuration from the environment alone, ignoring config files.
    pub fn from_env() -> Self {
        let mut config = ClientConfig::default();
        apply_env_overrides(&mut config);
        config
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not rescanned, so a value containing `${...}` is
/// inserted literally.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn apply_env_overrides(config: &mut ClientConfig) {
    if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
        if !endpoint.is_empty() {
            config.endpoint = Some(endpoint);
        }
    }
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.is_empty() {
            config.api_key = Some(key);
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `turing.toml` in the current directory
/// 2. `~/.config/turing/config.toml`
pub fn load_config() -> Result<ClientConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ClientConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("turing.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ClientConfig::default(),
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// Parse a config file body, expanding `${VAR}` references.
fn parse_config(content: &str) -> Result<ClientConfig> {
    let mut config: ClientConfig = toml::from_str(content)?;
    config.endpoint = config.endpoint.map(|e| resolve_env_vars(&e));
    config.api_key = config.api_key.map(|k| resolve_env_vars(&k));
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("turing"))
}
