mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod server;
mod state;
mod table;

use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("static-router starting");

    let config = Config::from_env()?;
    config.log_startup();

    server::start_server(config).await
}
