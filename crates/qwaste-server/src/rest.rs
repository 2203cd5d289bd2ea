use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{Value, json};
use tracing::{error, warn};

use quantumwaste::core::models::chain::CompositionSpec;
use quantumwaste::engine::config::{SimulationConfig, SimulationConfigBuilder};
use quantumwaste::engine::progress::ProgressReporter;
use quantumwaste::workflows::simulate;

use crate::AppState;

pub async fn welcome() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to QuantumWaste API" }))
}

/// Validates a `/simulate` request body and folds it into a config.
///
/// Every field is optional; types are checked strictly (a fractional or
/// negative `length` is invalid, not truncated) and range checks come from
/// the config builder.
pub fn parse_request(body: &Value) -> Result<SimulationConfig, String> {
    let Some(object) = body.as_object() else {
        return Err("body must be a JSON object".to_string());
    };

    let mut builder = SimulationConfigBuilder::new();

    if let Some(length) = object.get("length") {
        let length = length
            .as_u64()
            .and_then(|v| usize::try_from(v).ok())
            .ok_or_else(|| "length must be a non-negative integer".to_string())?;
        builder = builder.length(length);
    }

    if let Some(composition) = object.get("composition") {
        let spec: CompositionSpec = composition
            .as_str()
            .ok_or_else(|| "composition must be a string".to_string())?
            .parse()
            .map_err(|e| format!("{}", e))?;
        builder = builder.composition(spec);
    }

    if let Some(temperature) = object.get("temperature") {
        let celsius = temperature
            .as_f64()
            .ok_or_else(|| "temperature must be a number".to_string())?;
        builder = builder.temperature(celsius);
    }

    if let Some(pressure) = object.get("pressure") {
        let atmospheres = pressure
            .as_f64()
            .ok_or_else(|| "pressure must be a number".to_string())?;
        builder = builder.pressure(atmospheres);
    }

    builder.build().map_err(|e| e.to_string())
}

pub async fn api_simulate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let config = match parse_request(&body) {
        Ok(config) => config,
        Err(detail) => {
            warn!(%detail, "Rejected simulation request.");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("Invalid input data: {}", detail) })),
            )
                .into_response();
        }
    };

    let result = tokio::task::spawn_blocking(move || {
        simulate::run(&config, &state.model, &ProgressReporter::new())
    })
    .await;

    match result {
        Ok(Ok(outcome)) => (StatusCode::OK, Json(json!(outcome))).into_response(),
        Ok(Err(e)) => {
            error!(error = %e, "Simulation failed.");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Simulation task panicked or was cancelled.");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "simulation task failed" })),
            )
                .into_response()
        }
    }
}
