//! Chat endpoint
//!
//! validate → build prompt → call upstream → extract text → respond.
//! Each call is independent and makes at most one upstream request. The
//! upstream call runs on its own task, so a client hanging up does not cancel it.

use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::error::Error as StdError;
use std::sync::Arc;

use crate::config::AppState;
use crate::error::ChatError;
use crate::http;
use crate::logger;
use crate::prompt::SYSTEM_PROMPT;

/// Handle one chat request and always produce a JSON response.
pub async fn handle_chat<B>(req: Request<B>, state: Arc<AppState>) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    match process(req, &state).await {
        Ok(text) => http::build_chat_response(&text, &state.config.http),
        Err(err) => {
            if err.is_client_error() {
                logger::log_warning(&format!("Chat request rejected: {err}"));
            } else {
                logger::log_error(&format!("Chat request failed: {err}"));
            }
            http::build_error_response(&err, &state.config.http)
        }
    }
}

async fn process<B>(req: Request<B>, state: &Arc<AppState>) -> Result<String, ChatError>
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    if req.method() != Method::POST {
        return Err(ChatError::MethodNotAllowed);
    }

    let body = read_body(req.into_body(), state.config.http.max_body_size).await?;

    let message = extract_message(&body).ok_or(ChatError::BadRequest)?;
    let api_key = state
        .api_key()
        .ok_or(ChatError::Configuration)?
        .to_string();

    let state = Arc::clone(state);
    tokio::spawn(async move {
        state
            .upstream
            .complete(&api_key, SYSTEM_PROMPT, &message)
            .await
    })
    .await
    .map_err(ChatError::internal)?
}

/// Collect the body, failing with `PayloadTooLarge` once more than `limit`
/// bytes arrive. Covers bodies sent without `Content-Length`.
async fn read_body<B>(body: B, limit: u64) -> Result<Bytes, ChatError>
where
    B: Body,
    B::Error: Into<Box<dyn StdError + Send + Sync>>,
{
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
            Err(ChatError::PayloadTooLarge)
        }
        Err(err) => Err(ChatError::internal(err)),
    }
}

/// `message` from a JSON object body; missing, non-string, and empty values
/// all count as absent
fn extract_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")?
        .as_str()
        .filter(|message| !message.is_empty())
        .map(ToString::to_string)
}
