use crate::core::forest::features::FeatureVector;
use crate::core::forest::model::RecyclingModel;
use crate::core::models::chain::PolymerChain;
use crate::core::quantum::circuit::VariationalCircuit;
use crate::engine::config::SimulationConfig;
use crate::engine::error::EngineError;
use crate::engine::optimizer::GradientDescent;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::sampling;
use indexmap::IndexMap;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// The result of one simulation run, in the wire shape of the `/simulate`
/// response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub optimized_params: Vec<f64>,
    pub polymer_structure: PolymerChain,
    pub recycling_difficulty: f64,
    pub feature_importances: IndexMap<String, f64>,
}

/// Runs a complete simulation: optimize circuit parameters, assemble a
/// polymer chain, and predict its recycling difficulty.
#[instrument(skip_all, name = "simulation_workflow", fields(length = config.length))]
pub fn run(
    config: &SimulationConfig,
    model: &RecyclingModel,
    reporter: &ProgressReporter,
) -> Result<SimulationOutcome, EngineError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // === Phase 1: Circuit parameter optimization ===
    reporter.report(Progress::PhaseStart {
        name: "Optimization",
    });
    info!(
        iterations = config.optimizer.iterations,
        "Optimizing circuit parameters."
    );
    let optimizer = GradientDescent::new(&config.optimizer);
    let params = optimizer.optimize(
        &VariationalCircuit::new(),
        config.length as f64,
        &mut rng,
        reporter,
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Chain assembly ===
    reporter.report(Progress::PhaseStart { name: "Assembly" });
    let chain = sampling::generate_chain(config.length, config.composition, &mut rng)?;
    info!(
        length = chain.length,
        avg_bond_strength = chain.avg_bond_strength(),
        "Polymer chain assembled."
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Difficulty prediction ===
    reporter.report(Progress::PhaseStart { name: "Prediction" });
    let features = FeatureVector::new(&chain.features(), config.temperature, config.pressure);
    let prediction = model.predict(&features);
    info!(
        difficulty = prediction.difficulty,
        "Recycling difficulty predicted."
    );
    reporter.report(Progress::PhaseFinish);

    Ok(SimulationOutcome {
        optimized_params: params.to_vec(),
        polymer_structure: chain,
        recycling_difficulty: prediction.difficulty,
        feature_importances: prediction.feature_importances,
    })
}
