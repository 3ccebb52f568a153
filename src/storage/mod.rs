// src/storage/mod.rs
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::extractors::expression::ExpressionTuple;
use crate::utils::error::StorageError;

/// Where the TSV summary goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    /// An absent or empty path means standard output.
    pub fn from_arg(path: &str) -> Self {
        if path.is_empty() {
            OutputSink::Stdout
        } else {
            OutputSink::File(PathBuf::from(path))
        }
    }

    /// Creates (or truncates) the destination and wraps it in a `TupleWriter`.
    pub fn create(&self) -> Result<TupleWriter<Box<dyn Write>>, StorageError> {
        let out: Box<dyn Write> = match self {
            OutputSink::Stdout => Box::new(io::stdout().lock()),
            OutputSink::File(path) => {
                let file = File::create(path).map_err(|source| StorageError::Create {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!("Created output file {}", path.display());
                Box::new(file)
            }
        };
        Ok(TupleWriter::new(out))
    }
}

/// Writes `gene\torgan\trpkm\tvariance` lines. No header and no escaping:
/// a tab inside a value shifts the columns.
pub struct TupleWriter<W: Write> {
    inner: BufWriter<W>,
    written: usize,
}

impl<W: Write> TupleWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::new(inner),
            written: 0,
        }
    }

    pub fn write_tuple(&mut self, tuple: &ExpressionTuple) -> Result<(), StorageError> {
        writeln!(
            self.inner,
            "{}\t{}\t{}\t{}",
            tuple.gene, tuple.organ, tuple.rpkm, tuple.variance
        )?;
        self.written += 1;
        Ok(())
    }

    pub fn write_all(&mut self, tuples: &[ExpressionTuple]) -> Result<(), StorageError> {
        for tuple in tuples {
            self.write_tuple(tuple)?;
        }
        Ok(())
    }

    /// Flushes buffered lines and returns how many were written.
    pub fn finish(mut self) -> Result<usize, StorageError> {
        self.inner.flush()?;
        Ok(self.written)
    }
}
