use super::dataset;
use super::features::{FEATURE_NAMES, FeatureVector};
use super::forest::{ForestParams, RandomForest};
use super::scaler::StandardScaler;
use indexmap::IndexMap;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Upper end of the reported difficulty scale.
pub const DIFFICULTY_SCALE: f64 = 10.0;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model configuration invalid: {0}")]
    InvalidConfig(&'static str),

    #[error("Failed to access model file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode or decode model: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Training settings for the difficulty model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub n_trees: usize,
    pub max_depth: usize,
    pub min_samples_split: usize,
    pub n_samples: usize,
    pub seed: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            n_trees: 200,
            max_depth: 10,
            min_samples_split: 2,
            n_samples: 10_000,
            seed: 42,
        }
    }
}

/// A single difficulty prediction: the 0-10 score plus the per-feature
/// importance weights, keyed by display name in canonical feature order.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub difficulty: f64,
    pub feature_importances: IndexMap<String, f64>,
}

/// The trained recycling-difficulty model.
///
/// Bundles the standardization fit, the regression forest, and the target
/// range observed during training (used to map raw regression output onto the
/// 0-10 difficulty scale). Serializes to JSON for on-disk caching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecyclingModel {
    scaler: StandardScaler,
    forest: RandomForest,
    target_min: f64,
    target_max: f64,
}

impl RecyclingModel {
    /// Trains a fresh model on a seeded synthetic dataset.
    #[instrument(skip_all, fields(n_trees = config.n_trees, n_samples = config.n_samples))]
    pub fn train(config: &ModelConfig) -> Result<Self, ModelError> {
        if config.n_samples == 0 {
            return Err(ModelError::InvalidConfig("n_samples must be positive"));
        }
        if config.n_trees == 0 {
            return Err(ModelError::InvalidConfig("n_trees must be positive"));
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let set = dataset::synthesize(config.n_samples, &mut rng);
        let (target_min, target_max) = set.target_range();

        let scaler = StandardScaler::fit(&set.rows);
        let scaled = scaler.transform_all(&set.rows);

        let forest = RandomForest::fit(
            &scaled,
            &set.targets,
            &ForestParams {
                n_trees: config.n_trees,
                max_depth: config.max_depth,
                min_samples_split: config.min_samples_split,
            },
            &mut rng,
        );

        info!(
            trees = forest.len(),
            target_min, target_max, "Difficulty model trained."
        );

        Ok(Self {
            scaler,
            forest,
            target_min,
            target_max,
        })
    }

    /// Predicts the difficulty score and feature importances for one polymer.
    pub fn predict(&self, features: &FeatureVector) -> Prediction {
        let scaled = self.scaler.transform(features.as_row());
        let raw = self.forest.predict(&scaled);
        let difficulty = self.scale_difficulty(raw);

        let importances = self.forest.feature_importances();
        let feature_importances = FEATURE_NAMES
            .iter()
            .zip(importances.iter())
            .map(|(name, &weight)| (name.to_string(), weight))
            .collect();

        Prediction {
            difficulty,
            feature_importances,
        }
    }

    /// Maps raw regression output onto `[0, DIFFICULTY_SCALE]` using the
    /// training target range.
    fn scale_difficulty(&self, raw: f64) -> f64 {
        let span = self.target_max - self.target_min;
        if span <= f64::EPSILON {
            return 0.0;
        }
        (DIFFICULTY_SCALE * (raw - self.target_min) / span).clamp(0.0, DIFFICULTY_SCALE)
    }

    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        let encoded = serde_json::to_vec(self)?;
        fs::write(path, encoded).map_err(|e| ModelError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        info!(path = %path.display(), "Difficulty model saved.");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let bytes = fs::read(path).map_err(|e| ModelError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let model = serde_json::from_slice(&bytes)?;
        info!(path = %path.display(), "Difficulty model loaded.");
        Ok(model)
    }

    /// Loads a cached model, retraining (and re-caching) when the file is
    /// missing or unreadable.
    pub fn load_or_train(path: &Path, config: &ModelConfig) -> Result<Self, ModelError> {
        if path.exists() {
            match Self::load(path) {
                Ok(model) => return Ok(model),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Cached model unusable; retraining.");
                }
            }
        }
        let model = Self::train(config)?;
        model.save(path)?;
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::features::ChainFeatures;

    fn tiny_config() -> ModelConfig {
        ModelConfig {
            n_trees: 8,
            max_depth: 5,
            min_samples_split: 2,
            n_samples: 300,
            seed: 42,
        }
    }

    fn sample_features() -> FeatureVector {
        let chain = ChainFeatures {
            length: 50,
            count_a: 20,
            count_b: 15,
            count_c: 15,
            avg_bond_strength: 1.2,
        };
        FeatureVector::new(&chain, 25.0, 1.0)
    }

    #[test]
    fn train_rejects_degenerate_configs() {
        let mut config = tiny_config();
        config.n_samples = 0;
        assert!(matches!(
            RecyclingModel::train(&config),
            Err(ModelError::InvalidConfig(_))
        ));

        let mut config = tiny_config();
        config.n_trees = 0;
        assert!(matches!(
            RecyclingModel::train(&config),
            Err(ModelError::InvalidConfig(_))
        ));
    }

    #[test]
    fn difficulty_is_on_the_zero_to_ten_scale() {
        let model = RecyclingModel::train(&tiny_config()).unwrap();
        let prediction = model.predict(&sample_features());
        assert!((0.0..=DIFFICULTY_SCALE).contains(&prediction.difficulty));
    }

    #[test]
    fn longer_chains_are_harder_to_recycle() {
        let model = RecyclingModel::train(&tiny_config()).unwrap();
        let short = FeatureVector::new(
            &ChainFeatures {
                length: 10,
                count_a: 4,
                count_b: 3,
                count_c: 3,
                avg_bond_strength: 1.0,
            },
            25.0,
            1.0,
        );
        let long = FeatureVector::new(
            &ChainFeatures {
                length: 190,
                count_a: 70,
                count_b: 60,
                count_c: 60,
                avg_bond_strength: 1.0,
            },
            25.0,
            1.0,
        );
        assert!(model.predict(&long).difficulty > model.predict(&short).difficulty);
    }

    #[test]
    fn importances_use_display_names_in_canonical_order() {
        let model = RecyclingModel::train(&tiny_config()).unwrap();
        let prediction = model.predict(&sample_features());
        let keys: Vec<&str> = prediction
            .feature_importances
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, FEATURE_NAMES.to_vec());

        let sum: f64 = prediction.feature_importances.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn training_is_deterministic_for_a_fixed_seed() {
        let a = RecyclingModel::train(&tiny_config()).unwrap();
        let b = RecyclingModel::train(&tiny_config()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let model = RecyclingModel::train(&tiny_config()).unwrap();
        model.save(&path).unwrap();
        let restored = RecyclingModel::load(&path).unwrap();
        assert_eq!(model, restored);
    }

    #[test]
    fn load_or_train_caches_on_first_use() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let first = RecyclingModel::load_or_train(&path, &tiny_config()).unwrap();
        assert!(path.exists());
        let second = RecyclingModel::load_or_train(&path, &tiny_config()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn load_or_train_recovers_from_a_corrupt_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, b"not a model").unwrap();

        let model = RecyclingModel::load_or_train(&path, &tiny_config()).unwrap();
        let reloaded = RecyclingModel::load(&path).unwrap();
        assert_eq!(model, reloaded);
    }
}
