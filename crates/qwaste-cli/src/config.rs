use crate::cli::{SimulateArgs, TrainArgs};
use crate::error::{CliError, Result};
use quantumwaste::core::forest::model::ModelConfig;
use quantumwaste::core::models::chain::CompositionSpec;
use quantumwaste::engine::config::{SimulationConfig, SimulationConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of the cached difficulty model.
pub const DEFAULT_MODEL_PATH: &str = "qwaste-model.json";

/// A partial configuration as read from a TOML file. Every field is optional;
/// explicit CLI flags take precedence over file values, file values over
/// built-in defaults.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub simulation: SimulationSection,
    #[serde(default)]
    pub optimizer: OptimizerSection,
    #[serde(default)]
    pub model: ModelSection,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SimulationSection {
    pub length: Option<usize>,
    pub composition: Option<CompositionSpec>,
    pub temperature: Option<f64>,
    pub pressure: Option<f64>,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct OptimizerSection {
    pub iterations: Option<usize>,
    pub step_size: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ModelSection {
    pub path: Option<PathBuf>,
    pub trees: Option<usize>,
    pub max_depth: Option<usize>,
    pub samples: Option<usize>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let config = toml::from_str(&text).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        debug!(path = %path.display(), "Loaded configuration file.");
        Ok(config)
    }

    /// Loads the file named by `--config`, or an empty config when absent.
    pub fn from_args(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Folds CLI flags and file values into a validated simulation config.
pub fn resolve_simulation(args: &SimulateArgs, file: &FileConfig) -> Result<SimulationConfig> {
    let mut builder = SimulationConfigBuilder::new();

    if let Some(length) = args.length.or(file.simulation.length) {
        builder = builder.length(length);
    }
    if let Some(spec) = args.composition.or(file.simulation.composition) {
        builder = builder.composition(spec);
    }
    if let Some(celsius) = args.temperature.or(file.simulation.temperature) {
        builder = builder.temperature(celsius);
    }
    if let Some(atmospheres) = args.pressure.or(file.simulation.pressure) {
        builder = builder.pressure(atmospheres);
    }
    if let Some(seed) = args.seed.or(file.simulation.seed) {
        builder = builder.seed(seed);
    }
    if let Some(iterations) = args.iterations.or(file.optimizer.iterations) {
        builder = builder.iterations(iterations);
    }
    if let Some(step_size) = args.step_size.or(file.optimizer.step_size) {
        builder = builder.step_size(step_size);
    }

    Ok(builder.build()?)
}

/// The model file to load or create for a local simulation run.
pub fn resolve_model_path(args: &SimulateArgs, file: &FileConfig) -> PathBuf {
    args.model
        .clone()
        .or_else(|| file.model.path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH))
}

/// Training settings for a local simulation run, from the config file.
pub fn resolve_model_config(file: &FileConfig) -> ModelConfig {
    let mut config = ModelConfig::default();
    if let Some(trees) = file.model.trees {
        config.n_trees = trees;
    }
    if let Some(depth) = file.model.max_depth {
        config.max_depth = depth;
    }
    if let Some(samples) = file.model.samples {
        config.n_samples = samples;
    }
    if let Some(seed) = file.model.seed {
        config.seed = seed;
    }
    config
}

/// Training settings for the `train` subcommand.
pub fn resolve_train_config(args: &TrainArgs) -> ModelConfig {
    let mut config = ModelConfig::default();
    if let Some(trees) = args.trees {
        config.n_trees = trees;
    }
    if let Some(depth) = args.max_depth {
        config.max_depth = depth;
    }
    if let Some(samples) = args.samples {
        config.n_samples = samples;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config
}
