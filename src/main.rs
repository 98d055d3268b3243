//! Server binary: loads config from the environment (and `.env`), seeds the stores, serves the API.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use workout_api::{app, load_from_env, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("workout_api=info,tower_http=info")),
        )
        .init();

    let config = load_from_env()?;
    let state = AppState::new(&config);
    tracing::info!(
        workouts = state.workouts.len(),
        users = state.users.len(),
        progress = state.progress.len(),
        id_strategy = ?config.id_strategy,
        validation = ?config.validation_mode,
        "stores initialized"
    );

    let router = app(state, &config);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Workout Builder API listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
    }
}
