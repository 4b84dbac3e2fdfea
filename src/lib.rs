//! E-Scout chat proxy
//!
//! Accepts `POST /api/chat` with `{"message": "..."}`, forwards the message to the
//! Anthropic Messages API together with a fixed system prompt, and relays the
//! model's text reply as `{"response": "..."}`.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod prompt;
pub mod server;
pub mod upstream;
