use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use pagesim::api::handlers::{handle_fifo, handle_health, handle_lru, handle_optimo};
use pagesim::remote::client::RemoteClient;
use pagesim::remote::config::RemoteConfig;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:3000".parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                if i + 1 >= args.len() {
                    eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                    eprintln!("Example: {} --bind 127.0.0.1:3000", args[0]);
                    std::process::exit(1);
                }
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Remote execution configuration (read once, no globals):
    let config = RemoteConfig::from_env();
    tracing::info!("Remote base endpoint: {}", config.base_url);
    if config.local_mode {
        tracing::info!("Local mode enabled; remote execution is bypassed");
    }

    let client = Arc::new(RemoteClient::new(config));

    // 2. HTTP Router:
    let app = Router::new()
        .route("/api/fifo", post(handle_fifo))
        .route("/api/lru", post(handle_lru))
        .route("/api/optimo", post(handle_optimo))
        .route("/health", get(handle_health))
        .layer(Extension(client));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
