//! dwlr-server - HTTP API and assistant proxy for DWLR water insights.

use clap::Parser;
use dwlr_server::{create_router, AppState, Args, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = ServerConfig::from_env().with_static_dir(args.static_dir.clone());
    if config.openai_api_key.is_none() {
        log::warn!("[DWLR] server: OPENAI_API_KEY is not set, chat requests will be refused");
    }
    log::info!("[DWLR] server: completion API at {}", config.openai_base_url);

    let app = create_router(AppState::with_openai(config));
    let addr = args.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("[DWLR] server: listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("[DWLR] server: stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("[DWLR] server: failed to listen for ctrl-c: {}", e);
    }
}
