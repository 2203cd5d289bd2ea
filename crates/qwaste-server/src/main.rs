use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quantumwaste::core::forest::model::{ModelConfig, RecyclingModel};

mod rest;

pub struct AppState {
    pub model: RecyclingModel,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("qwaste_server=info".parse()?)
                .add_directive("quantumwaste=info".parse()?),
        )
        .init();

    let model = startup_model().context("failed to prepare the difficulty model")?;
    let state = Arc::new(AppState { model });

    let app = Router::new()
        .route("/", get(rest::welcome))
        .route("/simulate", post(rest::api_simulate))
        .layer(TraceLayer::new_for_http())
        // The browser front-end is served from another origin.
        .layer(CorsLayer::permissive())
        .with_state(state);

    let host = std::env::var("QWASTE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("QWASTE_PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "QuantumWaste API listening.");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Loads the cached difficulty model, or trains and caches one.
///
/// Training dominates startup time, so the trained model is written back to
/// `QWASTE_MODEL_PATH` when that variable is set.
fn startup_model() -> Result<RecyclingModel> {
    let mut config = ModelConfig::default();
    if let Ok(trees) = std::env::var("QWASTE_MODEL_TREES") {
        config.n_trees = trees.parse().context("QWASTE_MODEL_TREES must be an integer")?;
    }
    if let Ok(samples) = std::env::var("QWASTE_MODEL_SAMPLES") {
        config.n_samples = samples
            .parse()
            .context("QWASTE_MODEL_SAMPLES must be an integer")?;
    }

    let model = match std::env::var("QWASTE_MODEL_PATH") {
        Ok(path) => {
            let path = PathBuf::from(path);
            RecyclingModel::load_or_train(&path, &config)?
        }
        Err(_) => {
            info!("QWASTE_MODEL_PATH not set; training an in-memory model.");
            RecyclingModel::train(&config)?
        }
    };
    Ok(model)
}
