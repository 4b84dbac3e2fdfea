//! Anthropic Messages API adapter
//!
//! Wire types for the outbound request and inbound response, plus the client
//! that performs the single upstream call per chat request.

mod client;
#[cfg(test)]
pub(crate) mod mock;
mod types;

pub use client::AnthropicClient;
pub use types::{MessagesRequest, MessagesResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const MESSAGES_PATH: &str = "/v1/messages";
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Server-side tool the upstream runs on the model's behalf
pub const WEB_SEARCH_TOOL_TYPE: &str = "web_search_20250305";
pub const WEB_SEARCH_TOOL_NAME: &str = "web_search";
