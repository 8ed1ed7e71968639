//! Output formatting for CLI display
//!
//! Renders catalogs as aligned lines for the terminal. Everything here is
//! pure: a catalog goes in, lines come out, nothing is printed.

use crate::catalog::{Catalog, Entry};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Default column at which document labels are wrapped
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Label used for documents without an author list
pub const NO_AUTHOR: &str = "NO_AUTHOR.";

/// Padding that brings `key` up to the width of the longest key, plus one
fn key_padding(key: &str, max_key_len: usize) -> String {
    " ".repeat(max_key_len.abs_diff(key.chars().count()) + 1)
}

/// Format a collection listing, one `(key)` line per entry.
#[must_use]
pub fn format_root(catalog: &Catalog) -> Vec<String> {
    let max_key_len = catalog.max_key_len();
    catalog
        .iter()
        .map(|(key, entry)| {
            let padding = key_padding(key, max_key_len);
            format!("({key}) {padding} {}", entry.name)
        })
        .collect()
}

/// Format a document listing.
///
/// Each label is wrapped at `wrap_width`. The first line carries the `(key)`
/// prefix; continuation lines are indented so that text lines up under the
/// first line's text.
#[must_use]
pub fn format_folder(
    catalog: &Catalog,
    wrap_width: usize,
    label: fn(&Entry) -> String,
) -> Vec<String> {
    let max_key_len = catalog.max_key_len();
    let mut lines = Vec::new();

    for (key, entry) in catalog.iter() {
        let padding = key_padding(key, max_key_len);
        let indent = " ".repeat(key.chars().count() + 2);

        for (i, line) in wrap(&label(entry), wrap_width).into_iter().enumerate() {
            if i == 0 {
                lines.push(format!("({key}){padding} {line}"));
            } else {
                lines.push(format!("{indent}{padding} {line}"));
            }
        }
    }

    lines
}

/// `"A, B."` for an author list, [`NO_AUTHOR`] when absent or empty
#[must_use]
pub fn format_authors(authors: Option<&[String]>) -> String {
    match authors {
        Some(authors) if !authors.is_empty() => format!("{}.", authors.join(", ")),
        _ => NO_AUTHOR.to_string(),
    }
}

/// `"<authors> <title>."`
#[must_use]
pub fn authored_label(entry: &Entry) -> String {
    format!("{} {}.", format_authors(entry.authors.as_deref()), entry.name)
}

/// Title only
#[must_use]
pub fn plain_label(entry: &Entry) -> String {
    entry.name.clone()
}

fn split_at_width(s: &str, max: usize) -> (&str, &str) {
    let mut used = 0;
    for (idx, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            return s.split_at(idx);
        }
        used += w;
    }
    (s, "")
}

/// Split `word` after hyphens joining two letter runs (`Jean-Pierre` ->
/// `Jean-`, `Pierre`). Single letters around the hyphen don't count, so
/// `x-ray` stays whole.
fn hyphen_chunks(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let letter = |i: usize| chars.get(i).is_some_and(|(_, c)| c.is_alphabetic());
    let hyphen = |i: usize| chars.get(i).is_some_and(|(_, c)| *c == '-');

    let mut chunks = Vec::new();
    let mut start = 0;
    for i in 2..chars.len() {
        if !hyphen(i) {
            continue;
        }
        let before = letter(i - 1) && (letter(i - 2) || (i >= 3 && hyphen(i - 2) && letter(i - 3)));
        let after = letter(i + 1) && (letter(i + 2) || (hyphen(i + 2) && letter(i + 3)));
        if before && after {
            let end = chars[i].0 + 1;
            chunks.push(&word[start..end]);
            start = end;
        }
    }
    chunks.push(&word[start..]);
    chunks
}

/// Cut `rest` to at most `space` columns, preferring to end right after a
/// hyphen that has something other than hyphens before it.
fn split_long_word(rest: &str, space: usize) -> (&str, &str) {
    let (head, _) = split_at_width(rest, space);
    match head.rfind('-') {
        Some(idx) if idx > 0 && head[..idx].chars().any(|c| c != '-') => rest.split_at(idx + 1),
        _ => rest.split_at(head.len()),
    }
}

/// Greedy word wrap at `width` display columns.
///
/// Runs of whitespace collapse to a single space. Hyphenated words may break
/// after a hyphen. A word wider than a whole line is broken across lines,
/// filling whatever room is left on the current one first.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    let chunks = text.split_whitespace().flat_map(|word| {
        hyphen_chunks(word)
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| (chunk, i > 0))
    });

    for (chunk, glued) in chunks {
        let mut rest = chunk;
        while !rest.is_empty() {
            let sep = usize::from(!current.is_empty() && !glued);
            let chunk_width = rest.width();

            if current_width + sep + chunk_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(rest);
                current_width += sep + chunk_width;
                break;
            }

            if chunk_width > width {
                let space_left = width.saturating_sub(current_width + sep);
                let (mut head, mut tail) = split_long_word(rest, space_left);
                if head.is_empty() && current.is_empty() {
                    let end = rest.chars().next().map_or(rest.len(), char::len_utf8);
                    (head, tail) = rest.split_at(end);
                }
                if !head.is_empty() {
                    if sep == 1 {
                        current.push(' ');
                    }
                    current.push_str(head);
                    rest = tail;
                }
            }

            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
