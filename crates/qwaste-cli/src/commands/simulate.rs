use crate::cli::SimulateArgs;
use crate::config::{self, FileConfig};
use crate::error::{CliError, Result};
use crate::progress::CliProgressHandler;
use crate::report;
use quantumwaste::core::forest::model::RecyclingModel;
use quantumwaste::core::scene::layout::layout_chain;
use quantumwaste::engine::config::SimulationConfig;
use quantumwaste::engine::progress::ProgressReporter;
use quantumwaste::workflows::simulate::{self, SimulationOutcome};
use tracing::info;

pub async fn run(args: SimulateArgs) -> Result<()> {
    let file = FileConfig::from_args(args.config.as_ref())?;
    let sim_config = config::resolve_simulation(&args, &file)?;

    let outcome = match &args.remote {
        Some(base_url) => fetch_remote(base_url, &sim_config).await?,
        None => run_local(&args, &file, &sim_config)?,
    };

    print!("{}", report::render_outcome(&outcome));

    if let Some(path) = &args.output {
        let encoded = serde_json::to_string_pretty(&outcome).map_err(anyhow::Error::from)?;
        std::fs::write(path, encoded)?;
        println!("✓ Outcome written to: {}", path.display());
    }

    if let Some(path) = &args.scene {
        let scene = layout_chain(&outcome.polymer_structure);
        let encoded = serde_json::to_string_pretty(&scene).map_err(anyhow::Error::from)?;
        std::fs::write(path, encoded)?;
        println!("✓ Scene layout written to: {}", path.display());
    }

    Ok(())
}

fn run_local(
    args: &SimulateArgs,
    file: &FileConfig,
    sim_config: &SimulationConfig,
) -> Result<SimulationOutcome> {
    let model_path = config::resolve_model_path(args, file);
    let model_config = config::resolve_model_config(file);
    info!(path = %model_path.display(), "Preparing difficulty model.");
    let model = RecyclingModel::load_or_train(&model_path, &model_config)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the simulation workflow.");
    let outcome = tokio::task::block_in_place(|| simulate::run(sim_config, &model, &reporter))?;
    Ok(outcome)
}

/// Submits the request to a running QuantumWaste API, the way the browser
/// front-end does, and decodes the outcome from the response.
async fn fetch_remote(base_url: &str, sim_config: &SimulationConfig) -> Result<SimulationOutcome> {
    let url = format!("{}/simulate", base_url.trim_end_matches('/'));
    info!(%url, "Submitting simulation request.");

    let body = serde_json::json!({
        "length": sim_config.length,
        "composition": sim_config.composition.as_str(),
        "temperature": sim_config.temperature,
        "pressure": sim_config.pressure,
    });

    let response = reqwest::Client::new().post(&url).json(&body).send().await?;
    let status = response.status();
    if !status.is_success() {
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| status.to_string());
        return Err(CliError::Remote(detail));
    }

    Ok(response.json::<SimulationOutcome>().await?)
}
