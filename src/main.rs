#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::account::AccountClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional `.env` for local runs.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env()?;
    let account = AccountClient::new(config.api_login.clone(), config.timeouts)?;
    tracing::info!(upstream = %config.api_login, "account client initialized");

    let state = state::AppState::new(Arc::new(account));
    let app = routes::leptos_app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "hypefy dashboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
