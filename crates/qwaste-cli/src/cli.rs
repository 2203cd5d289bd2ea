use clap::{Args, Parser, Subcommand};
use quantumwaste::core::models::chain::CompositionSpec;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "QuantumWaste CLI - Simulate polymer recycling: optimize circuit parameters, generate a chain, and score how hard it is to recycle.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a polymer-recycling simulation, locally or against a remote API.
    Simulate(SimulateArgs),
    /// Train the recycling-difficulty model and save it for later runs.
    Train(TrainArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    // --- Simulation parameters ---
    /// Polymer length in monomers (2-200).
    #[arg(short, long, value_name = "INT")]
    pub length: Option<usize>,

    /// Composition of the generated chain: 'random' or 'uniform'.
    #[arg(long, value_name = "SPEC")]
    pub composition: Option<CompositionSpec>,

    /// Process temperature in degrees Celsius.
    #[arg(short, long, value_name = "FLOAT")]
    pub temperature: Option<f64>,

    /// Process pressure in atmospheres.
    #[arg(short, long, value_name = "FLOAT")]
    pub pressure: Option<f64>,

    /// RNG seed for a reproducible run.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    // --- Optimizer overrides ---
    /// Override the number of gradient-descent iterations.
    #[arg(long, value_name = "INT")]
    pub iterations: Option<usize>,

    /// Override the gradient-descent step size.
    #[arg(long, value_name = "FLOAT")]
    pub step_size: Option<f64>,

    // --- Files and endpoints ---
    /// Path to a configuration file in TOML format; explicit flags win.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the cached difficulty model (trained on first use).
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Write the full outcome as JSON to this path.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the 3D scene layout of the generated chain as JSON to this path.
    #[arg(long, value_name = "PATH")]
    pub scene: Option<PathBuf>,

    /// POST the request to a running QuantumWaste API instead of simulating
    /// locally (e.g. http://localhost:5000).
    #[arg(long, value_name = "URL")]
    pub remote: Option<String>,
}

/// Arguments for the `train` subcommand.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Path for the trained model file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Number of trees in the forest.
    #[arg(long, value_name = "INT")]
    pub trees: Option<usize>,

    /// Maximum tree depth.
    #[arg(long, value_name = "INT")]
    pub max_depth: Option<usize>,

    /// Number of synthetic training samples.
    #[arg(long, value_name = "INT")]
    pub samples: Option<usize>,

    /// Seed for the synthetic dataset and bootstrap sampling.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Overwrite an existing model file.
    #[arg(long)]
    pub force: bool,
}
