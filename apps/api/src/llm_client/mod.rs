/// LLM Client — the single point of entry for all generation-provider calls.
///
/// ARCHITECTURAL RULE: No other module may call the provider directly.
/// All LLM interactions MUST go through this module.
///
/// The provider speaks the OpenAI-compatible chat-completions wire format.
/// A successful completion body is relayed to the caller verbatim — this
/// service never reshapes the provider's response.
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// The model used for all generation calls.
pub const MODEL: &str = "gpt-3.5-turbo";
const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f32 = 0.7;

/// Sentinel credential that selects mock mode: the built prompt is returned
/// as the result and no network call is made.
pub const MOCK_API_KEY: &str = "mock-api-key";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// The single LLM client used by the generation service.
/// One call per request; a failed call is terminal for that request.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }

    /// True when no usable credential is configured and generation should
    /// fall back to returning the built prompt itself.
    pub fn is_mock(&self) -> bool {
        self.api_key.is_empty() || self.api_key == MOCK_API_KEY
    }

    /// Credential masked for logging: first and last four characters only.
    pub fn masked_key(&self) -> String {
        let key = &self.api_key;
        match (key.get(..4), key.get(key.len().saturating_sub(4)..)) {
            (Some(head), Some(tail)) if key.len() > 8 => format!("{head}...{tail}"),
            _ => "****".to_string(),
        }
    }

    /// Submits the prompt as a single user message and returns the raw
    /// completion body on success.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let url = format!("{}/chat/completions", self.api_url);
        info!("Sending generation request to {url}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        debug!("Generation call succeeded ({} bytes)", body.len());
        Ok(body)
    }
}
