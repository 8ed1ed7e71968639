//! Command-line interface definitions and parsing
//!
//! ```text
//! docshelf [KEY] [SEARCH] [-c NAME] [-w COLUMNS] [-q | -v]
//! ```
//!
//! `KEY` picks a collection directory (nested collections) or is the search
//! term (flat collections). `SEARCH` filters document names
//! case-insensitively. Both default to the empty string.

use clap::Parser;

use crate::browse::SelectionState;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "docshelf")]
#[command(about = "Browse keyed document collections and open a document", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Collection key, or search term for flat collections
    #[arg(value_name = "KEY", default_value = "")]
    pub key: String,

    /// Case-insensitive filter on document names
    #[arg(value_name = "SEARCH", default_value = "")]
    pub search_term: String,

    /// Collection to browse (defaults to the configured default)
    #[arg(short = 'c', long = "collection", value_name = "NAME")]
    pub collection: Option<String>,

    /// Wrap document listings at this column (overrides config)
    #[arg(short = 'w', long = "wrap", value_name = "COLUMNS")]
    pub wrap: Option<usize>,

    /// Suppress informational output
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug diagnostics to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Key and search term as the browser's starting state
    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        SelectionState::new(self.key.clone(), self.search_term.clone())
    }

    /// Log level implied by the verbosity flags
    #[must_use]
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Warn
        }
    }
}
