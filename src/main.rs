use std::sync::Arc;

use escout_proxy::config::{AppState, Config};
use escout_proxy::logger;
use escout_proxy::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // First argument: config file path without extension (default "config")
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config".to_string());
    let cfg = Config::load_from(&config_path)?;
    logger::init(&cfg.logging)?;

    // Create Tokio runtime, thread count from `server.workers`
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;

    let api_key = cfg.resolve_api_key();
    if api_key.is_none() {
        logger::log_missing_api_key();
    }
    let state = Arc::new(AppState::new(&cfg, api_key)?);

    logger::log_server_start(&addr, &cfg);

    // Use LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::run(listener, state, server::signal::shutdown_signal()))
        .await?;

    Ok(())
}
