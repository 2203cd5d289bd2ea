//! # Workflows Module
//!
//! High-level entry points that tie the engine and core together. A workflow
//! owns the phase structure of a run (optimize, assemble, predict), reports
//! progress, and returns a result shaped for direct serialization to API
//! clients.

pub mod simulate;
