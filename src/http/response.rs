//! HTTP response building module
//!
//! Every response the proxy emits is JSON. Builders take the `HttpConfig` so the
//! `Server` header and CORS headers are applied in one place.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::config::HttpConfig;
use crate::error::ChatError;

/// Successful chat reply
#[derive(Debug, Serialize)]
pub struct ChatReply<'a> {
    pub response: &'a str,
}

/// Error body shared by every failure path
#[derive(Debug, Serialize)]
pub struct ErrorReply<'a> {
    pub error: &'a str,
}

/// Build JSON response
fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    http: &HttpConfig,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_vec(body) {
        Ok(j) => j,
        Err(e) => {
            log_build_error("JSON", &e);
            return fallback_response();
        }
    };

    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Server", &http.server_name);

    if http.enable_cors {
        builder = builder.header("Access-Control-Allow-Origin", "*");
    }

    builder.body(Full::new(Bytes::from(json))).unwrap_or_else(|e| {
        log_build_error(status.as_str(), &e);
        fallback_response()
    })
}

/// `{"response": ...}` with 200
pub fn build_chat_response(text: &str, http: &HttpConfig) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &ChatReply { response: text }, http)
}

/// `{"error": ...}` with the error's status
pub fn build_error_response(err: &ChatError, http: &HttpConfig) -> Response<Full<Bytes>> {
    let message = err.to_string();
    json_response(err.status(), &ErrorReply { error: &message }, http)
}

/// Build 404 Not Found response
pub fn build_404_response(http: &HttpConfig) -> Response<Full<Bytes>> {
    json_response(StatusCode::NOT_FOUND, &ErrorReply { error: "Not Found" }, http)
}

/// Build 413 Payload Too Large response
pub fn build_413_response(http: &HttpConfig) -> Response<Full<Bytes>> {
    build_error_response(&ChatError::PayloadTooLarge, http)
}

/// Liveness probe body
pub fn build_health_response(http: &HttpConfig) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &serde_json::json!({ "status": "ok" }), http)
}

/// Build OPTIONS response (CORS preflight)
pub fn build_options_response(http: &HttpConfig) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", "POST, OPTIONS")
        .header("Server", &http.server_name)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .header("Access-Control-Max-Age", "86400")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            fallback_response()
        })
}

fn fallback_response() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(
        r#"{"error":"Internal server error"}"#,
    )));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

/// Log response build error
fn log_build_error(status: &str, error: &impl std::fmt::Display) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HealthConfig;
    use http_body_util::BodyExt;

    fn http_config(enable_cors: bool) -> HttpConfig {
        HttpConfig {
            server_name: "escout-test".to_string(),
            enable_cors,
            max_body_size: 1024,
            chat_path: "/api/chat".to_string(),
            health: HealthConfig::default(),
        }
    }

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_response_body() {
        let response = build_error_response(&ChatError::BadRequest, &http_config(false));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        assert_eq!(response.headers()["Server"], "escout-test");
        assert!(response.headers().get("Access-Control-Allow-Origin").is_none());
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Message is required"})
        );
    }

    #[tokio::test]
    async fn test_chat_response_with_cors() {
        let response = build_chat_response("A\n\nB", &http_config(true));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(body_json(response).await, serde_json::json!({"response": "A\n\nB"}));
    }

    #[test]
    fn test_options_response() {
        let response = build_options_response(&http_config(true));
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()["Access-Control-Allow-Methods"], "POST, OPTIONS");
    }
}
