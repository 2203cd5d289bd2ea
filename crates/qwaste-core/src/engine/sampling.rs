use crate::core::models::chain::{CompositionSpec, PolymerChain};
use crate::core::models::monomer::Monomer;
use crate::engine::error::EngineError;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::instrument;

/// Bond strengths are drawn uniformly from this half-open range.
pub const BOND_STRENGTH_RANGE: std::ops::Range<f64> = 0.5..1.5;

/// Draws a polymer chain of `length` monomers per the composition spec.
#[instrument(level = "trace", skip(rng))]
pub fn generate_chain(
    length: usize,
    spec: CompositionSpec,
    rng: &mut impl Rng,
) -> Result<PolymerChain, EngineError> {
    let composition: Vec<Monomer> = match spec {
        CompositionSpec::Random => (0..length)
            .map(|_| {
                *Monomer::ALL
                    .choose(rng)
                    .expect("monomer alphabet is non-empty")
            })
            .collect(),
        CompositionSpec::Uniform => vec![Monomer::A; length],
    };

    let bond_strengths: Vec<f64> = (0..length.saturating_sub(1))
        .map(|_| rng.gen_range(BOND_STRENGTH_RANGE))
        .collect();

    Ok(PolymerChain::new(composition, bond_strengths)?)
}
