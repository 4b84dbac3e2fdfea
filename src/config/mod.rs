// Configuration module entry point
// Loads layered configuration and holds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

use crate::upstream;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HealthConfig, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig,
    UpstreamConfig,
};

/// Environment variable holding the upstream credential
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Prefix for environment overrides, e.g. `ESCOUT_SERVER__PORT=9000`
const ENV_PREFIX: &str = "ESCOUT";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 300)? // 5 minutes
            .set_default("http.server_name", "escout-proxy")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("http.chat_path", "/api/chat")?
            .set_default("upstream.base_url", upstream::DEFAULT_BASE_URL)?
            .set_default("upstream.model", upstream::DEFAULT_MODEL)?
            .set_default("upstream.max_tokens", i64::from(upstream::DEFAULT_MAX_TOKENS))?
            .set_default("upstream.api_version", upstream::ANTHROPIC_API_VERSION)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Resolve the upstream credential: `upstream.api_key` first, then the
    /// `ANTHROPIC_API_KEY` environment variable. Empty values count as unset.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.upstream
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()))
    }
}
