//! # Quantum Simulation Module
//!
//! A dense state-vector simulator for the small, fixed variational circuit the
//! parameter optimizer trains against.
//!
//! ## Key Components
//!
//! - [`state`] - The state vector with single-qubit rotations, CNOT, and the
//!   Pauli-Z expectation readout
//! - [`circuit`] - The fixed 4-wire ansatz: an input-encoding rotation layer,
//!   entangling CNOTs, a trainable rotation layer, and a final CNOT into the
//!   readout wire

pub mod circuit;
pub mod state;
