//! Naming convention error types
//!
//! A directory that does not follow the `name__key` convention cannot be
//! indexed. The indexer reports the error and keeps going, so these values
//! are collected rather than propagated.

use std::path::PathBuf;
use thiserror::Error;

/// A filesystem name that does not split into exactly two parts
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Fix directory {} to match split pattern", path.display())]
pub struct NamingConventionError {
    /// Offending path
    pub path: PathBuf,
    /// Number of separators actually found
    pub separators: usize,
}

impl NamingConventionError {
    #[must_use]
    pub const fn new(path: PathBuf, separators: usize) -> Self {
        Self { path, separators }
    }
}
