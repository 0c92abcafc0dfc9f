use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use std::{env, net::SocketAddr};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config_dir = env::var("PAYROLL_CONFIG_DIR").unwrap_or_else(|_| "./config/kr".to_string());
    let listen = env::var("PAYROLL_LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let config = ConfigLoader::load(&config_dir)?;
    let state = AppState::new(config);

    let addr: SocketAddr = listen.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(config_dir = %config_dir, "listening on http://{addr}");

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
