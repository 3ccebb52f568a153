// src/extractors/mod.rs
pub mod expression;

// Re-export key extraction types for convenience
pub use expression::{extract, GeneSelector};
