use super::features::FeatureRow;
use rand::Rng;
use rand_distr::{Distribution, Normal};

const TARGET_NOISE_STD: f64 = 0.1;

/// A synthetic supervised training set for the difficulty model.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    pub rows: Vec<FeatureRow>,
    pub targets: Vec<f64>,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn target_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &t in &self.targets {
            min = min.min(t);
            max = max.max(t);
        }
        (min, max)
    }
}

/// Draws `n_samples` synthetic polymers and labels them with a noisy linear
/// difficulty target.
///
/// Sampling ranges and the target coefficients follow the reference data
/// generator: lengths 5..200, a random three-way composition split, bond
/// strengths in [0.5, 2.0), temperatures in [20, 100), pressures in [1, 10).
pub fn synthesize(n_samples: usize, rng: &mut impl Rng) -> TrainingSet {
    let noise = Normal::new(0.0, TARGET_NOISE_STD).expect("noise std is positive");

    let mut rows = Vec::with_capacity(n_samples);
    let mut targets = Vec::with_capacity(n_samples);

    for _ in 0..n_samples {
        let length = rng.gen_range(5..200usize);
        let count_a = rng.gen_range(0..length);
        let count_b = rng.gen_range(0..length - count_a);
        let count_c = length - count_a - count_b;
        let bond = rng.gen_range(0.5..2.0);
        let temperature = rng.gen_range(20.0..100.0);
        let pressure = rng.gen_range(1.0..10.0);

        let target = 0.5 * length as f64
            + 0.3 * count_a as f64
            + 0.4 * count_b as f64
            + 0.6 * count_c as f64
            + 2.0 * bond
            + 0.1 * temperature
            + 0.2 * pressure
            + noise.sample(rng);

        rows.push([
            length as f64,
            count_a as f64,
            count_b as f64,
            count_c as f64,
            bond,
            temperature,
            pressure,
        ]);
        targets.push(target);
    }

    TrainingSet { rows, targets }
}
