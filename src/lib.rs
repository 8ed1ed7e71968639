//! docshelf - a keyed document shelf browser
//!
//! Documents live in collection directories named `Display_Name__key`, and
//! document files are named `Author_Names__Title.pdf`. docshelf indexes
//! those names, lists them with short keys, and opens the chosen document in
//! the platform's viewer.

use std::path::PathBuf;
use thiserror::Error;

pub mod browse;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod launcher;
pub mod naming;
pub mod output;
pub mod selector;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Collection root is missing or not a directory
    #[error("Directory {} not valid", .0.display())]
    InvalidRootDirectory(PathBuf),
    /// Requested collection is not configured
    #[error("Unknown collection '{name}' (available: {available})")]
    UnknownCollection { name: String, available: String },
    /// Opener could not be resolved on PATH
    #[error("not found executable {0}")]
    ExecutableNotFound(String),
    /// Path has no host-side form for the bridge opener
    #[error("Cannot translate {} to a host path", .0.display())]
    PathTranslation(PathBuf),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Reading user input failed
    #[error("Input error: {0}")]
    InputError(#[from] ui::InputError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, ShelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ShelfError::InvalidRootDirectory(PathBuf::from("/docs/books")).to_string(),
            "Directory /docs/books not valid"
        );
        assert_eq!(
            ShelfError::ExecutableNotFound("xdg-open".into()).to_string(),
            "not found executable xdg-open"
        );
        assert_eq!(
            ShelfError::UnknownCollection {
                name: "comics".into(),
                available: "books, rtfm".into(),
            }
            .to_string(),
            "Unknown collection 'comics' (available: books, rtfm)"
        );
    }

    #[test]
    fn test_error_from_input() {
        let error: ShelfError = ui::InputError::Interrupted.into();
        assert!(matches!(error, ShelfError::InputError(_)));
    }
}
