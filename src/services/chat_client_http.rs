//! Chat-completion client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, Conversation, ConversationMessage, GenerationError, ServiceConfig};
use crate::ports::GenerationClient;

/// Environment variable holding the service credential.
pub const API_KEY_ENV: &str = "VOWELKIT_API_KEY";
/// Fallback credential variable shared with other OpenAI tooling.
pub const FALLBACK_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// HTTP client for an OpenAI-compatible chat-completion endpoint.
#[derive(Clone)]
pub struct HttpChatClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpChatClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &ServiceConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    /// Create from the environment credential with the given configuration.
    pub fn from_env_with_config(config: &ServiceConfig) -> Result<Self, AppError> {
        let api_key = read_api_key()?;
        Self::new(api_key, config)
    }
}

fn read_api_key() -> Result<String, AppError> {
    [API_KEY_ENV, FALLBACK_API_KEY_ENV]
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|value| !value.trim().is_empty()))
        .map(|value| value.trim().to_string())
        .ok_or_else(|| {
            AppError::Configuration(format!(
                "{} environment variable not set (or {})",
                API_KEY_ENV, FALLBACK_API_KEY_ENV
            ))
        })
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [ConversationMessage],
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GenerationClient for HttpChatClient {
    fn generate(&self, conversation: &Conversation, model: &str) -> Result<String, GenerationError> {
        let request = ApiRequest { model, messages: conversation.messages() };

        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::Status { status: status.as_u16(), body });
        }

        let body = response.text().map_err(|e| GenerationError::Transport(e.to_string()))?;
        extract_first_choice(&body)
    }
}

/// Pull the first choice's content out of a chat-completion response body.
fn extract_first_choice(body: &str) -> Result<String, GenerationError> {
    let api_response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

    api_response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(GenerationError::EmptyResponse)
}
