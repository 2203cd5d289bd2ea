use super::features::{FeatureRow, NUM_FEATURES};
use super::tree::{RegressionTree, TreeParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Ensemble shape and growth limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForestParams {
    pub n_trees: usize,
    pub max_depth: usize,
    pub min_samples_split: usize,
}

/// A bootstrap-aggregated ensemble of regression trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<RegressionTree>,
}

impl RandomForest {
    /// Fits `n_trees` trees, each on a bootstrap resample of the data.
    ///
    /// Per-tree RNG seeds are drawn from `rng` up front so the fit is
    /// deterministic for a seeded caller even when trees are built in
    /// parallel.
    #[instrument(skip_all, fields(n_trees = params.n_trees, n_samples = targets.len()))]
    pub fn fit(
        rows: &[FeatureRow],
        targets: &[f64],
        params: &ForestParams,
        rng: &mut impl Rng,
    ) -> Self {
        let tree_params = TreeParams {
            max_depth: params.max_depth,
            min_samples_split: params.min_samples_split,
        };
        let seeds: Vec<u64> = (0..params.n_trees).map(|_| rng.next_u64()).collect();

        #[cfg(feature = "parallel")]
        let iterator = seeds.par_iter();

        #[cfg(not(feature = "parallel"))]
        let iterator = seeds.iter();

        let trees = iterator
            .map(|&seed| {
                let mut tree_rng = StdRng::seed_from_u64(seed);
                let indices = bootstrap_indices(targets.len(), &mut tree_rng);
                RegressionTree::fit(rows, targets, &indices, &tree_params)
            })
            .collect();

        Self { trees }
    }

    /// Mean prediction across the ensemble.
    pub fn predict(&self, row: &FeatureRow) -> f64 {
        if self.trees.is_empty() {
            return 0.0;
        }
        self.trees.iter().map(|t| t.predict(row)).sum::<f64>() / self.trees.len() as f64
    }

    /// Impurity importances averaged over trees, re-normalized to sum to 1.
    pub fn feature_importances(&self) -> [f64; NUM_FEATURES] {
        let mut totals = [0.0; NUM_FEATURES];
        for tree in &self.trees {
            for (feature, &value) in tree.importances().iter().enumerate() {
                totals[feature] += value;
            }
        }
        let sum: f64 = totals.iter().sum();
        if sum > 0.0 {
            for v in &mut totals {
                *v /= sum;
            }
        }
        totals
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

fn bootstrap_indices(n: usize, rng: &mut impl Rng) -> Vec<usize> {
    (0..n).map(|_| rng.gen_range(0..n)).collect()
}
