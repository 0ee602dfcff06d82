//! Claude messages API client for verdict analysis.
//!
//! Sends one content description to the API with the fixed instructional
//! prompt and returns the parsed, validated verdict. Exactly one request
//! per call: no retries, no timeout beyond the transport default.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::Verdict;
use super::{parse, prompt};
use crate::error::{LensError, LensResult};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

/// Default Claude model used for analysis.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Client for calling the Claude messages API.
pub struct ClaudeClient {
    api_key: String,
    model: String,
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

impl ClaudeClient {
    /// Create a new client with the given API key and model.
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_endpoint(api_key, model, ANTHROPIC_API_URL)
    }

    /// Create a client against a custom messages endpoint.
    pub fn with_endpoint(api_key: &str, model: &str, endpoint: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            endpoint: endpoint.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Analyze a content description and return the validated verdict.
    ///
    /// The caller is responsible for the pre-network gates (non-empty
    /// description, credential present); this method assumes both hold.
    pub async fn analyze(&self, description: &str) -> LensResult<Verdict> {
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt::build_prompt(description),
            }],
        };

        debug!(model = %self.model, "Calling Claude messages API");
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(LensError::InvalidCredential);
        }
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| {
                    format!("API request failed with status {}", status.as_u16())
                });
            return Err(LensError::Provider(message));
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|_| LensError::malformed("response body is not valid JSON"))?;

        let text = body
            .content
            .first()
            .and_then(|block| block.text.as_deref())
            .ok_or_else(|| LensError::malformed("no text content in response"))?;

        let verdict = parse::parse_verdict(text)?;
        debug!(rating = %verdict.rating, "Analysis verdict parsed");
        Ok(verdict)
    }
}
