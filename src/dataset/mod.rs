// src/dataset/mod.rs
pub mod decoder;
pub mod input;
pub mod models;

// Re-export key dataset types for convenience
pub use decoder::decode_reader;
pub use input::InputSource;
