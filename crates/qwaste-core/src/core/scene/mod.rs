//! # Scene Geometry Module
//!
//! Turns a polymer chain into a serializable 3D scene description: one sphere
//! per monomer, one line segment per bond, and a default camera. Renderers
//! consume this layout; nothing here draws.

pub mod layout;
