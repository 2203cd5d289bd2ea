use crate::cli::TrainArgs;
use crate::config::resolve_train_config;
use crate::error::{CliError, Result};
use quantumwaste::core::forest::model::RecyclingModel;
use tracing::info;

pub async fn run(args: TrainArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(CliError::Argument(format!(
            "model file '{}' already exists (pass --force to overwrite)",
            args.output.display()
        )));
    }

    let config = resolve_train_config(&args);
    info!(
        trees = config.n_trees,
        samples = config.n_samples,
        "Training difficulty model."
    );
    println!(
        "Training difficulty model ({} trees on {} samples)...",
        config.n_trees, config.n_samples
    );

    let model = tokio::task::block_in_place(|| RecyclingModel::train(&config))?;
    model.save(&args.output)?;

    println!("✓ Model written to: {}", args.output.display());
    Ok(())
}
