//! Configuration domain models.

use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

/// Configuration loaded from `vowelkit.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VowelkitConfig {
    /// Generation service settings.
    #[serde(default)]
    pub service: ServiceConfig,
    /// Export settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Chat-completion service settings.
///
/// The API key is deliberately absent; it is injected from the environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Chat-completion endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_timeout() -> u64 {
    120
}

/// Where generated resources are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { directory: default_output_dir() }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
