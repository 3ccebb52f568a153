// src/dataset/input.rs
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::utils::error::AppError;

/// Where the XML export is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// An absent or empty path means standard input.
    pub fn from_arg(path: &str) -> Self {
        if path.is_empty() {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(path))
        }
    }

    /// Opens the stream. A file that cannot be opened is fatal.
    pub fn open(&self) -> Result<Box<dyn Read>, AppError> {
        match self {
            InputSource::Stdin => {
                tracing::debug!("Reading expression data from stdin");
                Ok(Box::new(io::stdin().lock()))
            }
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| AppError::InputOpen {
                    path: path.clone(),
                    source,
                })?;
                tracing::info!("Expression file {} opened", path.display());
                Ok(Box::new(file))
            }
        }
    }
}
