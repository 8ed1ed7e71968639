//! Browser controller
//!
//! Drives the navigation flow for one collection:
//!
//! - **nested** roots: collection key -> document listing -> open
//! - **flat** roots: document listing -> open
//!
//! An unknown collection key lists the collections and asks for a new one.
//! A search term that matches nothing falls back to the full listing once.

mod profile;

pub use profile::Profile;

use std::path::{Path, PathBuf};

use crate::catalog::{self, Catalog};
use crate::config::Layout;
use crate::launcher::Launcher;
use crate::naming::NamingConventionError;
use crate::output::{DEFAULT_WRAP_WIDTH, format_folder, format_root};
use crate::selector::{self, Selection};
use crate::ui::{OutputWriter, UserInput};
use crate::{Result, ShelfError};

/// What the user asked for on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Collection key (nested) or initial search term (flat)
    pub key: String,
    /// Case-insensitive filter on document stems
    pub search_term: String,
}

impl SelectionState {
    #[must_use]
    pub fn new(key: impl Into<String>, search_term: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            search_term: search_term.into(),
        }
    }
}

/// How a browse session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// A document was handed to the launcher
    Opened(PathBuf),
    /// The user backed out, or there was nothing to choose from
    Cancelled,
    /// The user pressed Ctrl+C at a prompt
    Interrupted,
}

/// Two-level document browser for one collection root
pub struct Browser<'a> {
    profile: Profile,
    root: PathBuf,
    wrap_width: usize,
    input: &'a dyn UserInput,
    output: &'a dyn OutputWriter,
    launcher: &'a dyn Launcher,
}

impl<'a> Browser<'a> {
    /// Create a browser over `root`.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::InvalidRootDirectory` if `root` is not a directory.
    pub fn new(
        profile: Profile,
        root: impl Into<PathBuf>,
        input: &'a dyn UserInput,
        output: &'a dyn OutputWriter,
        launcher: &'a dyn Launcher,
    ) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ShelfError::InvalidRootDirectory(root));
        }

        Ok(Self {
            profile,
            root,
            wrap_width: DEFAULT_WRAP_WIDTH,
            input,
            output,
            launcher,
        })
    }

    #[must_use]
    pub const fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    /// Run one browse session.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError` if a directory cannot be indexed, input cannot be
    /// read, or the launcher fails.
    pub fn run(&self, state: SelectionState) -> Result<BrowseOutcome> {
        match self.profile.layout {
            Layout::Nested => self.run_nested(state),
            Layout::Flat => self.run_flat(&state),
        }
    }

    fn run_nested(&self, mut state: SelectionState) -> Result<BrowseOutcome> {
        let indexed = catalog::index_collections(&self.root)?;
        self.report_skipped(&indexed.skipped);
        let collections = indexed.catalog;

        loop {
            if let Some(collection) = collections.get(&state.key) {
                return self.browse_documents(collection.path(), &state.search_term);
            }

            if collections.is_empty() {
                self.output.warning(&format!(
                    "{}: no collections found in {}",
                    self.profile.kind,
                    self.root.display()
                ));
                return Ok(BrowseOutcome::Cancelled);
            }

            self.key_not_found(&state.key);
            self.show(format_root(&collections));

            match selector::select(self.input, &self.profile.kind, &collections)? {
                Selection::Key(key) => state.key = key,
                Selection::Cancelled => return Ok(BrowseOutcome::Cancelled),
                Selection::Interrupted => return Ok(BrowseOutcome::Interrupted),
            }
        }
    }

    fn run_flat(&self, state: &SelectionState) -> Result<BrowseOutcome> {
        let search_term = if state.key.is_empty() {
            &state.search_term
        } else {
            &state.key
        };
        self.browse_documents(&self.root, search_term)
    }

    fn browse_documents(&self, dir: &Path, search_term: &str) -> Result<BrowseOutcome> {
        let documents = self.index_with_fallback(dir, search_term)?;
        if documents.is_empty() {
            self.output.info(&format!(
                "{}: no documents in {}",
                self.profile.kind,
                dir.display()
            ));
            return Ok(BrowseOutcome::Cancelled);
        }

        self.show(format_folder(
            &documents,
            self.wrap_width,
            self.profile.format_label,
        ));

        let key = match selector::select(self.input, &self.profile.kind, &documents)? {
            Selection::Key(key) => key,
            Selection::Cancelled => return Ok(BrowseOutcome::Cancelled),
            Selection::Interrupted => return Ok(BrowseOutcome::Interrupted),
        };

        let Some(document) = documents.get(&key) else {
            return Ok(BrowseOutcome::Cancelled);
        };
        log::debug!("opening {}", document.path.display());
        self.launcher.launch(document.path())?;
        self.output.success(&format!("Opening {}", document.path.display()));
        Ok(BrowseOutcome::Opened(document.path.clone()))
    }

    /// Index `dir` filtered by `search_term`; when that finds nothing, say so
    /// and index it again unfiltered.
    fn index_with_fallback(&self, dir: &Path, search_term: &str) -> Result<Catalog> {
        let documents = catalog::index_documents(dir, search_term, self.profile.parse_document)?;
        if !documents.is_empty() || search_term.is_empty() {
            return Ok(documents);
        }

        self.output.warning(&format!(
            "{}: no document matches \"{search_term}\", showing all documents:",
            self.profile.kind
        ));
        catalog::index_documents(dir, "", self.profile.parse_document)
    }

    fn key_not_found(&self, key: &str) {
        let kind = &self.profile.kind;
        if key.is_empty() {
            self.output.info(&format!("{kind}: directory keys:"));
        } else {
            self.output
                .warning(&format!("{kind}: wrong directory key \"{key}\", directory keys:"));
        }
    }

    fn report_skipped(&self, skipped: &[NamingConventionError]) {
        for error in skipped {
            self.output.warning(&error.to_string());
        }
    }

    fn show(&self, lines: Vec<String>) {
        for line in lines {
            self.output.write(&line);
        }
    }
}
