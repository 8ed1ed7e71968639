//! Catalog data model
//!
//! A catalog is an insertion-ordered mapping from a short textual key to an
//! [`Entry`]. Root catalogs key collections by the suffix encoded in their
//! directory names; folder catalogs key documents by their 1-based discovery
//! order.

mod indexer;

pub use indexer::{
    DOCUMENT_EXTENSIONS, Indexed, has_document_extension, index_collections, index_documents,
    is_hidden, matches_search_term,
};

use std::path::{Path, PathBuf};

/// One indexed collection or document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Human readable name (underscores already replaced)
    pub name: String,
    /// Absolute path on disk
    pub path: PathBuf,
    /// Ordered author list, absent for collections and unparsable documents
    pub authors: Option<Vec<String>>,
}

impl Entry {
    #[must_use]
    pub const fn new(name: String, path: PathBuf, authors: Option<Vec<String>>) -> Self {
        Self { name, path, authors }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Insertion-ordered key to entry mapping
///
/// Keys are expected to be unique; the directory naming convention is what
/// guarantees it, so a duplicate insert replaces the earlier entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, Entry)>,
}

impl Catalog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert an entry, keeping first-insertion order for its key
    pub fn insert(&mut self, key: String, entry: Entry) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            log::warn!("duplicate catalog key '{key}', keeping the later entry");
            slot.1 = entry;
        } else {
            self.entries.push((key, entry));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, entry)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, entry)| (k.as_str(), entry))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Length in characters of the longest key, 0 for an empty catalog
    #[must_use]
    pub fn max_key_len(&self) -> usize {
        self.keys().map(|k| k.chars().count()).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> Entry {
        Entry::new(name.to_string(), PathBuf::from(format!("/docs/{name}")), None)
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut catalog = Catalog::new();
        catalog.insert("topo".into(), entry("Topology"));
        catalog.insert("alg".into(), entry("Algebra"));
        catalog.insert("an".into(), entry("Analysis"));

        let keys: Vec<&str> = catalog.keys().collect();
        assert_eq!(keys, vec!["topo", "alg", "an"]);
    }

    #[test]
    fn test_duplicate_key_replaces_in_place() {
        let mut catalog = Catalog::new();
        catalog.insert("a".into(), entry("First"));
        catalog.insert("b".into(), entry("Second"));
        catalog.insert("a".into(), entry("Third"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a").unwrap().name, "Third");
        assert_eq!(catalog.keys().next(), Some("a"));
    }

    #[test]
    fn test_max_key_len() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.max_key_len(), 0);

        catalog.insert("1".into(), entry("a"));
        catalog.insert("22".into(), entry("b"));
        catalog.insert("333".into(), entry("c"));
        assert_eq!(catalog.max_key_len(), 3);
    }

    #[test]
    fn test_lookup() {
        let mut catalog = Catalog::new();
        catalog.insert("alg".into(), entry("Algebra"));

        assert!(catalog.contains_key("alg"));
        assert!(!catalog.contains_key("Alg"));
        assert!(catalog.get("missing").is_none());
    }
}
