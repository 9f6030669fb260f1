use std::{env, sync::LazyLock};

use anyhow::Result;
use axum::serve;
use dotenv::dotenv;
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static BIND_ADDRESS: LazyLock<String> =
    LazyLock::new(|| env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string()));

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env file if it exists into the environment
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Setting up the action-group webhook and the Streamable HTTP MCP service");
    let router = leave_mcp::app();

    info!("Starting server on {}", *BIND_ADDRESS);
    let tcp_listener = TcpListener::bind(BIND_ADDRESS.as_str()).await?;

    // Graceful shutdown on CTRL+C
    let shutdown = async {
        signal::ctrl_c().await.unwrap_or_else(|e| {
            eprintln!("failed to install CTRL+C handler: {e}");
        });
    };

    serve(tcp_listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
