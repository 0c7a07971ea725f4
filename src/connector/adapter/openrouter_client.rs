use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::connector::adapter::required_env;
use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3-0324:free";
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
const COMPLETIONS_PATH: &str = "/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completions response we care about. Only the
/// first choice is ever decoded.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for OpenAI-compatible chat-completion endpoints (OpenRouter by default).
///
/// Configure through the environment:
///
/// | Variable              | Default                                | Purpose          |
/// |-----------------------|----------------------------------------|------------------|
/// | `OPENROUTER_API_KEY`  | required                               | Bearer token     |
/// | `OPENROUTER_BASE_URL` | `https://openrouter.ai/api/v1`         | Any compatible API |
/// | `OPENROUTER_MODEL`    | `deepseek/deepseek-chat-v3-0324:free`  | Model identifier |
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenRouterClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Ok(Self {
            client: build_client(REQUEST_TIMEOUT)?,
            api_key: api_key.into(),
            model: model.into(),
            url,
        })
    }

    pub fn from_env() -> Result<Self, DomainError> {
        let key = required_env(API_KEY_ENV)?;
        let base = std::env::var("OPENROUTER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(key, model, base)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, DomainError> {
        self.client = build_client(timeout)?;
        Ok(self)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn parse_content(body: &str) -> Result<String, DomainError> {
        let api_response: ApiResponse = serde_json::from_str(body).map_err(|e| {
            DomainError::format(format!("OpenRouterClient: malformed response: {e}"), body)
        })?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|first| serde_json::from_value::<Choice>(first).ok())
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                DomainError::format(
                    "OpenRouterClient: response has no choices[0].message.content",
                    body,
                )
            })
    }
}

fn build_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| {
            DomainError::internal(format!("OpenRouterClient: cannot build HTTP client: {e}"))
        })
}

#[async_trait]
impl ChatClient for OpenRouterClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: system,
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        debug!("OpenRouterClient: POST {} (model={})", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    "request timed out"
                } else {
                    "request failed"
                };
                DomainError::network(format!("OpenRouterClient: {reason}: {e}"), None)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DomainError::network(format!("OpenRouterClient: failed to read response: {e}"), None)
        })?;

        if !status.is_success() {
            warn!("OpenRouterClient: API returned {status}: {body}");
            return Err(DomainError::network(
                format!("OpenRouterClient: API returned {status}"),
                Some(body),
            ));
        }

        Self::parse_content(&body)
    }
}
