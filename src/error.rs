//! Chat request error taxonomy
//!
//! Every failure of a chat call ends up as one `ChatError`. Its `Display` text is
//! the caller-facing message placed in `{"error": ...}`; `status()` gives the HTTP
//! status code it is surfaced with.

use hyper::StatusCode;
use thiserror::Error;

/// Message used when an unexpected failure carries no text of its own
pub const FALLBACK_MESSAGE: &str = "Failed to generate hunting recommendations";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    /// Any method other than POST
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Body has no usable `message`
    #[error("Message is required")]
    BadRequest,

    /// Body exceeds `http.max_body_size`
    #[error("Payload too large")]
    PayloadTooLarge,

    /// No upstream credential available
    #[error("API key not configured. Please set ANTHROPIC_API_KEY in the server environment.")]
    Configuration,

    /// Upstream answered with a non-success status
    #[error("{0}")]
    Upstream(String),

    /// Upstream answered but produced no text blocks
    #[error("No response from Claude")]
    EmptyResponse,

    /// Transport or decoding failure outside the taxonomy above
    #[error("{0}")]
    Internal(String),
}

impl ChatError {
    /// Wrap an unexpected error, substituting the fallback for an empty message.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            Self::Internal(FALLBACK_MESSAGE.to_string())
        } else {
            Self::Internal(message)
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Configuration | Self::Upstream(_) | Self::EmptyResponse | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the caller, rather than this server or the upstream, is at fault
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MethodNotAllowed | Self::BadRequest | Self::PayloadTooLarge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ChatError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ChatError::BadRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ChatError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(ChatError::Configuration.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ChatError::Upstream("rate limited".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ChatError::EmptyResponse.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ChatError::MethodNotAllowed.to_string(), "Method not allowed");
        assert_eq!(ChatError::BadRequest.to_string(), "Message is required");
        assert_eq!(ChatError::EmptyResponse.to_string(), "No response from Claude");
        assert_eq!(ChatError::PayloadTooLarge.to_string(), "Payload too large");
        assert!(ChatError::Configuration
            .to_string()
            .starts_with("API key not configured"));
    }

    #[test]
    fn test_internal_fallback() {
        assert_eq!(
            ChatError::internal(""),
            ChatError::Internal(FALLBACK_MESSAGE.to_string())
        );
        assert_eq!(
            ChatError::internal("connection reset"),
            ChatError::Internal("connection reset".to_string())
        );
    }
}
