//! Error types for btrcompressor.
//!
//! Only usage errors ever reach the process exit status. Attribute write
//! failures are values the walker counts and moves past.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A compression token outside the supported vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidAlgorithm {
    /// A token was given but is not a known algorithm.
    #[error("invalid compression chosen ({0})")]
    Unknown(String),

    /// Neither `-c` nor `-d` was given.
    #[error("no compression chosen, use -c <compression> or -d")]
    Unspecified,
}

/// Writing the compression attribute on one entry failed.
#[derive(Error, Debug)]
#[error("cannot set compression on {}: {source}", .path.display())]
pub struct AttributeError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl AttributeError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AttributeError {
            path: path.into(),
            source,
        }
    }

    /// Kind of the underlying I/O failure.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
