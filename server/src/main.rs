mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // Missing .env is fine; the defaults cover local runs.
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "portfolio listening");
    axum::serve(listener, app).await?;
    Ok(())
}
