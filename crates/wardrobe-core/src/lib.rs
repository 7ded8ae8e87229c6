//! Core types, configuration, and errors for the wardrobe layout engine.
//!
//! This crate provides the foundational types used across the other wardrobe crates:
//! - Geometric value types (dimensions, columns, shelves, module state)
//! - Solver configuration (minimum spacing, thickness ranges, insert defaults)
//! - Module presets
//! - Error types

pub mod config;
pub mod errors;
pub mod presets;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
