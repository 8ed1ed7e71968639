//! Naming convention parser
//!
//! Collections and documents carry their metadata in their filesystem names,
//! separated by a literal double underscore:
//!
//! - directories: `Display_Name__key`
//! - document stems: `Author_One_Author_Two__Document_Title`
//!
//! Underscores inside a part become spaces in display names and author
//! separators in author lists.

mod error;

pub use error::NamingConventionError;

use std::path::Path;

/// Separator between the two halves of an encoded name
pub const SPLIT_MARK: &str = "__";

/// Decoded collection directory name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionName {
    pub display_name: String,
    pub key: String,
}

/// Decoded document stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentName {
    pub display_name: String,
    pub authors: Option<Vec<String>>,
}

/// Split `name` on [`SPLIT_MARK`] into exactly two parts.
///
/// Returns the separator count on failure.
fn split_pair(name: &str) -> Result<(&str, &str), usize> {
    let separators = name.matches(SPLIT_MARK).count();
    if separators != 1 {
        return Err(separators);
    }
    name.split_once(SPLIT_MARK).ok_or(separators)
}

/// Replace underscores with single spaces.
#[must_use]
pub fn display_name(raw: &str) -> String {
    raw.replace('_', " ")
}

/// Split an underscore-joined author list into its ordered names.
#[must_use]
pub fn authors(raw: &str) -> Vec<String> {
    raw.split('_').map(str::to_string).collect()
}

/// Decode a collection directory name of the form `name__key`.
///
/// `path` is only used to report the offending entry.
///
/// # Errors
///
/// Returns `NamingConventionError` when the name does not contain exactly one
/// separator.
pub fn parse_collection(name: &str, path: &Path) -> Result<CollectionName, NamingConventionError> {
    let (name_part, key) = split_pair(name)
        .map_err(|separators| NamingConventionError::new(path.to_path_buf(), separators))?;

    Ok(CollectionName {
        display_name: display_name(name_part),
        key: key.to_string(),
    })
}

/// Decode a document stem of the form `authors__title`.
///
/// Stems that break the convention stay discoverable: the whole stem becomes
/// the display name and the author list is absent.
#[must_use]
pub fn parse_authored_document(stem: &str) -> DocumentName {
    match split_pair(stem) {
        Ok((authors_part, title)) => DocumentName {
            display_name: display_name(title),
            authors: if authors_part.is_empty() {
                None
            } else {
                Some(authors(authors_part))
            },
        },
        Err(separators) => {
            log::debug!("degraded parse for '{stem}' ({separators} separators)");
            DocumentName {
                display_name: display_name(stem),
                authors: None,
            }
        }
    }
}

/// Decode a document stem that carries no author metadata.
#[must_use]
pub fn parse_plain_document(stem: &str) -> DocumentName {
    DocumentName {
        display_name: display_name(stem),
        authors: None,
    }
}
