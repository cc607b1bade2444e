//! Mathematical utilities for the generator

/// Mixing-time heuristics for backbite randomization
pub mod mixing;
