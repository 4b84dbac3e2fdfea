// Messages API client

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use tracing::debug;

use super::types::{upstream_error_message, MessagesRequest, MessagesResponse};
use super::MESSAGES_PATH;
use crate::config::UpstreamConfig;
use crate::error::ChatError;

/// HTTP client for the Anthropic Messages API.
///
/// Holds a pooled `reqwest::Client`, so one instance is shared by every
/// connection task. Each `complete` call issues exactly one request; there is
/// no retry and no timeout beyond the client default.
pub struct AnthropicClient {
    client: reqwest::Client,
    /// Full endpoint URL (base + `MESSAGES_PATH`)
    url: String,
    model: String,
    max_tokens: u32,
    api_version: String,
}

impl AnthropicClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let base = config.base_url.trim_end_matches('/');

        let mut builder = reqwest::Client::builder();
        // Loopback upstreams (local mocks, sidecars) bypass system proxies
        if is_loopback(base) {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            url: format!("{base}{MESSAGES_PATH}"),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            api_version: config.api_version.clone(),
        })
    }

    /// Send `message` with the given system prompt and return the joined text
    /// of the reply.
    pub async fn complete(
        &self,
        api_key: &str,
        system: &str,
        message: &str,
    ) -> Result<String, ChatError> {
        let request =
            MessagesRequest::single_turn(&self.model, self.max_tokens, system, message);

        debug!(model = %self.model, url = %self.url, "sending upstream request");

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.api_version)
            .json(&request)
            .send()
            .await
            .map_err(ChatError::internal)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(ChatError::Upstream(upstream_error_message(status, &body)));
        }

        let body = response.bytes().await.map_err(ChatError::internal)?;
        let parsed: MessagesResponse =
            serde_json::from_slice(&body).map_err(ChatError::internal)?;

        let text = parsed.joined_text();
        if text.is_empty() {
            return Err(ChatError::EmptyResponse);
        }
        Ok(text)
    }
}

fn is_loopback(base_url: &str) -> bool {
    reqwest::Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_owned))
        .is_some_and(|host| host == "localhost" || host == "127.0.0.1" || host == "[::1]")
}
