//! # Difficulty Model Module
//!
//! A random-forest regressor over polymer features, trained on synthetic data,
//! predicting the 0-10 recycling-difficulty score together with impurity-based
//! feature importances.
//!
//! ## Key Components
//!
//! - [`features`] - The fixed feature vector (order and display names) consumed
//!   by the model
//! - [`dataset`] - Reproducible synthetic training data
//! - [`scaler`] - Per-feature standardization fit on the training set
//! - [`tree`] - CART regression trees with variance-reduction splits
//! - [`forest`] - Bootstrap aggregation over trees, with averaged importances
//! - [`model`] - The trained model: scaler + forest + difficulty scale, with
//!   JSON persistence

pub mod dataset;
pub mod features;
pub mod forest;
pub mod model;
pub mod scaler;
pub mod tree;
