//! Logger module
//!
//! Thin facade over `tracing` so call sites name the event they report:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LoggingConfig};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `logging.level`. Should be called once at
/// application startup.
pub fn init(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    info!("Chat proxy listening on http://{addr}{}", config.http.chat_path);
    info!(
        "Upstream: {} (model {}, max_tokens {})",
        config.upstream.base_url, config.upstream.model, config.upstream.max_tokens
    );
    if let Some(workers) = config.server.workers {
        info!("Worker threads: {workers}");
    }
    if let Some(max) = config.performance.max_connections {
        info!("Max connections: {max}");
    }
    if config.http.health.enabled {
        info!("Health probe: {}", config.http.health.path);
    }
}

pub fn log_missing_api_key() {
    warn!(
        "No API key configured ({}); chat requests will fail until it is set",
        crate::config::API_KEY_ENV
    );
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    debug!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    error!("Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    error!("{message}");
}

pub fn log_warning(message: &str) {
    warn!("{message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    info!(target: "access", "{}", entry.format(format));
}

pub fn log_shutdown(active_connections: usize) {
    info!("Shutdown requested, stopped accepting ({active_connections} connections still open)");
}
