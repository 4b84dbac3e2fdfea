// Messages API wire types

use hyper::StatusCode;
use serde::{Deserialize, Serialize};

use super::{WEB_SEARCH_TOOL_NAME, WEB_SEARCH_TOOL_TYPE};

/// Body of `POST /v1/messages`
#[derive(Debug, Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub system: &'a str,
    pub messages: Vec<Message<'a>>,
    pub tools: Vec<Tool<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Tool<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub name: &'a str,
}

impl<'a> MessagesRequest<'a> {
    /// Single-turn request: one user message plus the web search tool
    pub fn single_turn(model: &'a str, max_tokens: u32, system: &'a str, message: &'a str) -> Self {
        Self {
            model,
            max_tokens,
            system,
            messages: vec![Message {
                role: "user",
                content: message,
            }],
            tools: vec![Tool {
                kind: WEB_SEARCH_TOOL_TYPE,
                name: WEB_SEARCH_TOOL_NAME,
            }],
        }
    }
}

/// Successful response body; only the content blocks are read
#[derive(Debug, Default, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Option<Vec<ContentBlock>>,
}

/// One response block. Non-text kinds (tool use, search results) keep only
/// their tag and are skipped when extracting text.
#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl MessagesResponse {
    /// Text blocks in response order, joined by a blank line
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .flatten()
            .filter(|block| block.kind == "text")
            .map(|block| block.text.as_deref().unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

/// Message for a failed upstream call: `error.message` from the body when
/// present, otherwise `API error: <status code>`.
pub fn upstream_error_message(status: StatusCode, body: &[u8]) -> String {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    parsed
        .error
        .and_then(|detail| detail.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("API error: {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> MessagesResponse {
        serde_json::from_str(json).expect("valid response body")
    }

    #[test]
    fn test_request_shape() {
        let request = MessagesRequest::single_turn("model-x", 4000, "be brief", "hello");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "model-x",
                "max_tokens": 4000,
                "system": "be brief",
                "messages": [{"role": "user", "content": "hello"}],
                "tools": [{"type": "web_search_20250305", "name": "web_search"}]
            })
        );
    }

    #[test]
    fn test_joined_text_drops_other_blocks() {
        let response = parse(
            r#"{"content":[{"type":"text","text":"A"},{"type":"other"},{"type":"text","text":"B"}]}"#,
        );
        assert_eq!(response.joined_text(), "A\n\nB");
    }

    #[test]
    fn test_joined_text_keeps_order_and_duplicates() {
        let response = parse(
            r#"{"content":[
                {"type":"text","text":"second"},
                {"type":"server_tool_use","id":"srvtoolu_1","name":"web_search","input":{"query":"quail"}},
                {"type":"web_search_tool_result","tool_use_id":"srvtoolu_1","content":[]},
                {"type":"text","text":"first"},
                {"type":"text","text":"first"}
            ]}"#,
        );
        assert_eq!(response.joined_text(), "second\n\nfirst\n\nfirst");
    }

    #[test]
    fn test_joined_text_empty_cases() {
        assert_eq!(parse(r#"{"content":[]}"#).joined_text(), "");
        assert_eq!(parse(r#"{"id":"msg_1"}"#).joined_text(), "");
        assert_eq!(parse(r#"{"content":null}"#).joined_text(), "");
        assert_eq!(
            parse(r#"{"content":[{"type":"tool_use","id":"t","name":"x","input":{}}]}"#)
                .joined_text(),
            ""
        );
    }

    #[test]
    fn test_error_message_from_body() {
        let body = br#"{"type":"error","error":{"type":"rate_limit_error","message":"rate limited"}}"#;
        assert_eq!(
            upstream_error_message(StatusCode::TOO_MANY_REQUESTS, body),
            "rate limited"
        );
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(
            upstream_error_message(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>"),
            "API error: 502"
        );
        assert_eq!(
            upstream_error_message(StatusCode::UNAUTHORIZED, br#"{"error":{}}"#),
            "API error: 401"
        );
        assert_eq!(
            upstream_error_message(StatusCode::INTERNAL_SERVER_ERROR, br#"{"error":{"message":""}}"#),
            "API error: 500"
        );
    }
}
