// Application state module
// Read-only state shared by every connection task

use super::types::Config;
use crate::upstream::AnthropicClient;

/// Application state
pub struct AppState {
    pub config: Config,
    pub upstream: AnthropicClient,

    // Resolved once at startup; `None` makes every chat call fail with a
    // configuration error instead of stopping the server
    api_key: Option<String>,
}

impl AppState {
    pub fn new(config: &Config, api_key: Option<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            config: config.clone(),
            upstream: AnthropicClient::new(&config.upstream)?,
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
