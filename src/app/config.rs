//! Configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::domain::{AppError, VowelkitConfig};

/// Config file looked up in the current directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "vowelkit.toml";
/// Environment override for the service endpoint.
pub const API_URL_ENV: &str = "VOWELKIT_API_URL";
/// Environment override for the model identifier.
pub const MODEL_ENV: &str = "VOWELKIT_MODEL";

/// Load configuration.
///
/// An explicit path must exist. Without one, `vowelkit.toml` in the current
/// directory is used when present, otherwise defaults. Environment overrides are
/// applied last.
pub fn load_config(path: Option<&Path>) -> Result<VowelkitConfig, AppError> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            parse_config_file(path)?
        }
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                parse_config_file(&default_path)?
            } else {
                debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                VowelkitConfig::default()
            }
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<VowelkitConfig, AppError> {
    debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}

/// Parse configuration from TOML text.
pub fn parse_config_content(content: &str) -> Result<VowelkitConfig, AppError> {
    let config: VowelkitConfig = toml::from_str(content)?;
    if config.service.model.trim().is_empty() {
        return Err(AppError::config_error("service.model must not be empty"));
    }
    if config.service.timeout_secs == 0 {
        return Err(AppError::config_error("service.timeout_secs must be greater than zero"));
    }
    Ok(config)
}

fn apply_env_overrides(config: &mut VowelkitConfig) -> Result<(), AppError> {
    if let Some(value) = non_empty_env(API_URL_ENV) {
        config.service.api_url = Url::parse(&value).map_err(|err| {
            AppError::config_error(format!("Invalid {} '{}': {}", API_URL_ENV, value, err))
        })?;
    }
    if let Some(value) = non_empty_env(MODEL_ENV) {
        config.service.model = value;
    }
    Ok(())
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
