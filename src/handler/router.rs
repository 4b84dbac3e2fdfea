//! Request router
//!
//! Dispatches by path: the chat endpoint, the liveness probe, or 404.
//! Writes one access log line per request when enabled.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};

use super::chat::handle_chat;
use crate::config::{AppState, HttpConfig};
use crate::http;
use crate::logger::{self, AccessLogEntry};

pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let started = Instant::now();
    let logging = &state.config.logging;
    let mut entry = logging
        .access_log
        .then(|| AccessLogEntry::from_request(&req, remote_addr));

    let response = route_request(req, Arc::clone(&state)).await;

    if let Some(entry) = entry.as_mut() {
        let body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.finish(response.status().as_u16(), body_bytes, started.elapsed());
        logger::log_access(entry, &logging.access_log_format);
    }

    Ok(response)
}

async fn route_request<B>(req: Request<B>, state: Arc<AppState>) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let http_config = &state.config.http;
    let path = req.uri().path();

    if path == http_config.chat_path {
        if req.method() == Method::OPTIONS && http_config.enable_cors {
            return http::build_options_response(http_config);
        }
        if let Some(resp) = check_body_size(&req, http_config) {
            return resp;
        }
        return handle_chat(req, state).await;
    }

    let health = &http_config.health;
    if health.enabled
        && path == health.path
        && matches!(*req.method(), Method::GET | Method::HEAD)
    {
        return http::build_health_response(http_config);
    }

    http::build_404_response(http_config)
}

/// Validate Content-Length header against max body size
/// Returns Some(413 response) if too large, None otherwise
fn check_body_size<B>(req: &Request<B>, http_config: &HttpConfig) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    let size = content_length.to_str().ok()?.parse::<u64>().ok()?;
    if size > http_config.max_body_size {
        logger::log_warning(&format!(
            "Request body too large: {size} bytes (max: {})",
            http_config.max_body_size
        ));
        return Some(http::build_413_response(http_config));
    }
    None
}
