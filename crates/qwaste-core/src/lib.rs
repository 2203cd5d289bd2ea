//! # QuantumWaste Core Library
//!
//! A simulation library for estimating how difficult a polymer is to recycle,
//! combining a variational quantum-circuit parameter search with a random-forest
//! difficulty model trained on synthetic polymer data.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`PolymerChain`),
//!   pure numerical machinery (the 4-qubit state-vector simulator, the regression
//!   forest and its scaler), and presentation-layer geometry (`scene`).
//!
//! - **[`engine`]: The Logic Core.** This stateful layer orchestrates a simulation
//!   run. It holds the configuration types and their builders, the gradient-descent
//!   optimizer with parameter-shift gradients, the chain sampler, and the progress
//!   reporting channel.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute a complete simulation:
//!   optimize circuit parameters, assemble a polymer chain, and predict its
//!   recycling difficulty with per-feature importances.

pub mod core;
pub mod engine;
pub mod workflows;
