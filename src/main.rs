mod app;
mod clock;
mod config;
mod error;
mod labels;
mod meals;
mod state;
mod weight;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "daylog=debug,axum=info,tower_http=info".to_string());
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

    let config = AppConfig::from_env()?;
    match config.utc_offset {
        Some(offset) => tracing::info!(%offset, "day keys pinned to fixed offset"),
        None => tracing::info!("day keys follow the host time zone"),
    }

    let state = AppState::init(&config);
    let app = app::build_app(state);
    app::serve(app, &config).await
}
