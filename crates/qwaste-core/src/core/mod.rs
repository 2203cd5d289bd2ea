//! # Core Module
//!
//! This module provides the fundamental building blocks for polymer-recycling
//! simulation, serving as the stateless computational core of the library.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of the simulation:
//!
//! - **Polymer Representation** ([`models`]) - Monomers, chains, and the features
//!   derived from them
//! - **Quantum Simulation** ([`quantum`]) - A dense state-vector simulator for the
//!   fixed variational ansatz and its Pauli-Z readout
//! - **Difficulty Model** ([`forest`]) - Synthetic training data, feature scaling,
//!   and a random-forest regressor with impurity-based feature importances
//! - **Scene Geometry** ([`scene`]) - The deterministic 3D layout of a chain for
//!   downstream renderers
//!
//! Everything in this layer is free of I/O and free of mutable global state;
//! randomness always enters through a caller-supplied RNG.

pub mod forest;
pub mod models;
pub mod quantum;
pub mod scene;
