//! # Polymer Models Module
//!
//! This module contains the fundamental data structures used to represent
//! polymers, providing the foundation for chain generation, feature extraction,
//! and difficulty prediction.
//!
//! ## Key Components
//!
//! - [`monomer`] - The monomer alphabet and its textual form
//! - [`chain`] - Polymer chains (composition plus bond strengths) and the
//!   composition specifications used to generate them
//! - [`features`] - Scalar features derived from a chain for the difficulty model

pub mod chain;
pub mod features;
pub mod monomer;
