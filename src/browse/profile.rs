//! Per-collection behaviour
//!
//! Collections differ only in layout, in how document stems are decoded and
//! in how document labels are rendered. A [`Profile`] bundles those choices
//! so one controller serves every collection kind.

use crate::catalog::Entry;
use crate::config::{CollectionConfig, DocumentStyle, Layout};
use crate::naming::{self, DocumentName};
use crate::output;

/// Strategy record for one collection kind
#[derive(Debug, Clone)]
pub struct Profile {
    /// Human readable kind shown in prompts (`books`, `rtfm`, ...)
    pub kind: String,
    pub layout: Layout,
    pub parse_document: fn(&str) -> DocumentName,
    pub format_label: fn(&Entry) -> String,
}

impl Profile {
    #[must_use]
    pub fn new(kind: impl Into<String>, layout: Layout, style: DocumentStyle) -> Self {
        let (parse_document, format_label): (fn(&str) -> DocumentName, fn(&Entry) -> String) =
            match style {
                DocumentStyle::Authored => {
                    (naming::parse_authored_document, output::authored_label)
                }
                DocumentStyle::Plain => (naming::parse_plain_document, output::plain_label),
            };

        Self {
            kind: kind.into(),
            layout,
            parse_document,
            format_label,
        }
    }

    #[must_use]
    pub fn from_config(kind: &str, collection: &CollectionConfig) -> Self {
        Self::new(kind, collection.layout, collection.style)
    }
}
