use std::net::SocketAddr;

use tracing::{info, Level};

mod backend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; also captures `log` records from the lower layers
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let state = backend::initialize_backend().await?;
    let app = backend::create_router(state);

    let port = std::env::var("REMEMBERME_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000u16);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
