// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to read input stream: {0}")]
    Read(#[from] std::io::Error), // Includes non UTF-8 input

    #[error("Malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not create output file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Could not open input file {}: {source}", path.display())]
    InputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse XML file: {0}")]
    Decode(#[from] DecodeError), // Automatically convert decode errors

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
