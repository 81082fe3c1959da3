mod app;
mod auth;
mod config;
mod contact;
mod dto;
mod error;
mod experiences;
mod extractors;
mod models;
mod repository;
mod state;
mod technologies;
mod validation;

#[cfg(test)]
mod test_utils;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "portfolio_backend=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    if !dotenv_loaded {
        tracing::info!("no .env file found, relying on environment variables");
    }

    let config = AppConfig::from_env()?;
    if config.api_key.is_none() {
        tracing::warn!("API_KEY is not set; admin routes will answer 500");
    }

    let app_state = AppState::init(config).await?;
    let app = app::build_app(app_state.clone());

    app::serve(app, &app_state.config).await
}
