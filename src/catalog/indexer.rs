//! Directory indexing
//!
//! Every call rescans the directory; nothing is cached between runs. Entry
//! order is whatever order the filesystem yields, never sorted.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Catalog, Entry};
use crate::naming::{self, DocumentName, NamingConventionError};
use crate::{Result, ShelfError};

/// Lower-case extensions accepted as documents
pub const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "djvu", "epub", "ps"];

/// A catalog together with the names that had to be skipped while building it
#[derive(Debug, Clone, Default)]
pub struct Indexed {
    pub catalog: Catalog,
    pub skipped: Vec<NamingConventionError>,
}

/// True when the final path component starts with a dot
#[must_use]
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

/// True when the extension, compared case-insensitively, is a document type
#[must_use]
pub fn has_document_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        let ext = ext.to_string_lossy().to_lowercase();
        DOCUMENT_EXTENSIONS.contains(&ext.as_str())
    })
}

/// Case-insensitive substring match of `search_term` against the file stem.
///
/// An empty search term matches everything.
#[must_use]
pub fn matches_search_term(path: &Path, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    path.file_stem().is_some_and(|stem| {
        stem.to_string_lossy()
            .to_lowercase()
            .contains(&search_term.to_lowercase())
    })
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(ShelfError::InvalidRootDirectory(dir.to_path_buf()))
    }
}

fn children(dir: &Path) -> Result<impl Iterator<Item = PathBuf>> {
    Ok(fs::read_dir(dir)?.filter_map(|entry| match entry {
        Ok(entry) => Some(entry.path()),
        Err(e) => {
            log::warn!("skipping unreadable entry in {}: {e}", dir.display());
            None
        }
    }))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}

/// Index the immediate, non-hidden subdirectories of `root` as collections.
///
/// Directories that break the `name__key` convention are skipped and returned
/// in [`Indexed::skipped`].
///
/// # Errors
///
/// Returns `ShelfError::InvalidRootDirectory` if `root` is not a directory, or
/// `ShelfError::IoError` if it cannot be read.
pub fn index_collections(root: &Path) -> Result<Indexed> {
    ensure_dir(root)?;

    let mut indexed = Indexed::default();
    for dir in children(root)?.filter(|p| p.is_dir() && !is_hidden(p)) {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match naming::parse_collection(&name, &dir) {
            Ok(parsed) => {
                let entry = Entry::new(parsed.display_name, absolute(&dir)?, None);
                indexed.catalog.insert(parsed.key, entry);
            }
            Err(e) => {
                log::warn!("{e}");
                indexed.skipped.push(e);
            }
        }
    }

    log::debug!(
        "indexed {} collection(s) in {}, skipped {}",
        indexed.catalog.len(),
        root.display(),
        indexed.skipped.len()
    );
    Ok(indexed)
}

/// Index the documents directly inside `dir`.
///
/// A path is kept when it is a file, has a document extension, and its stem
/// contains `search_term` case-insensitively. Keys are `"1"`, `"2"`, ... in
/// discovery order. `parse` decodes each stem into a name and author list.
///
/// # Errors
///
/// Returns `ShelfError::InvalidRootDirectory` if `dir` is not a directory, or
/// `ShelfError::IoError` if it cannot be read.
pub fn index_documents(
    dir: &Path,
    search_term: &str,
    parse: fn(&str) -> DocumentName,
) -> Result<Catalog> {
    ensure_dir(dir)?;

    let mut catalog = Catalog::new();
    let documents = children(dir)?.filter(|p| {
        p.is_file() && has_document_extension(p) && matches_search_term(p, search_term)
    });

    for (number, file) in documents.enumerate() {
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parsed = parse(&stem);
        let entry = Entry::new(parsed.display_name, absolute(&file)?, parsed.authors);
        catalog.insert((number + 1).to_string(), entry);
    }

    log::debug!(
        "indexed {} document(s) in {} (search term '{search_term}')",
        catalog.len(),
        dir.display()
    );
    Ok(catalog)
}
