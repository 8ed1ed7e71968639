//! Testing utilities for docshelf
//!
//! This module provides a `Shelf` wrapper around a temporary directory for
//! building collection and document fixtures.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary documents root that is removed on drop
///
/// # Examples
/// ```ignore
/// let shelf = Shelf::new();
/// let algebra = shelf.collection("Algebra__alg");
/// shelf.file_in(&algebra, "Lang__Algebra.pdf");
/// ```
pub struct Shelf {
    dir: TempDir,
}

impl Shelf {
    /// Create an empty shelf
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temporary shelf"),
        }
    }

    /// Root directory of the shelf
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create a collection directory directly under the root
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn collection(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::create_dir_all(&path).expect("Failed to create collection directory");
        path
    }

    /// Create a file directly under the root
    pub fn file(&self, name: &str) -> PathBuf {
        self.file_in(self.root(), name)
    }

    /// Create a file inside `dir`
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn file_in(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("Failed to create test file");
        file.write_all(b"test content").expect("Failed to write test file");
        path
    }
}

impl Default for Shelf {
    fn default() -> Self {
        Self::new()
    }
}
