/// HTTP invoker for the chat-completions endpoint.
use std::time::Duration;

use serde_json::Value;

use super::errors::PplxError;
use super::request::ChatRequest;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";

// One shot, no retries. Generous because sonar answers can take a while.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client holding the API key and target base URL.
pub struct PerplexityClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl PerplexityClient {
    /// Build a client with a fixed request timeout.
    ///
    /// # Errors
    ///
    /// Returns `PplxError::Network` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(api_key: String, base_url: &str) -> Result<Self, PplxError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(PplxError::Network)?;
        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// POST the payload to `/chat/completions` and return the raw JSON body.
    ///
    /// # Errors
    ///
    /// - `PplxError::Network` on connection failure or timeout.
    /// - `PplxError::Api` on a non-2xx status, carrying status and body.
    /// - `PplxError::MalformedResponse` when a 2xx body is not JSON.
    pub async fn chat_completion(&self, request: &ChatRequest) -> Result<Value, PplxError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(PplxError::Network)?;

        let status = response.status();
        let body = response.bytes().await.map_err(PplxError::Network)?;

        if !status.is_success() {
            return Err(PplxError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice(&body).map_err(|e| PplxError::MalformedResponse {
            detail: e.to_string(),
        })
    }
}
