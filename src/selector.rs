//! Interactive key selection
//!
//! Prompts until the user types a key present in the catalog or the cancel
//! token. Invalid answers are ignored and the same prompt is shown again;
//! there is no attempt limit.

use crate::catalog::Catalog;
use crate::ui::{InputError, UserInput};

/// Answer that abandons the current prompt
pub const CANCEL_TOKEN: &str = "q";

/// How a prompt loop ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A key present in the catalog
    Key(String),
    /// The user typed the cancel token, or input ran out
    Cancelled,
    /// The user pressed Ctrl+C; the process should exit successfully
    Interrupted,
}

impl Selection {
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Cancelled | Self::Interrupted => None,
        }
    }
}

/// Prompt text for a catalog of the given kind (`books`, `rtfm`, ...)
#[must_use]
pub fn prompt_for(kind: &str) -> String {
    format!("{kind}: type {kind} (id) to preview | '{CANCEL_TOKEN}' to return")
}

/// Ask for a key of `catalog` until a valid one or the cancel token arrives.
///
/// Surrounding whitespace in answers is ignored.
///
/// # Errors
///
/// Returns `InputError::Io` if reading input fails for a reason other than an
/// interrupt.
pub fn select(
    input: &dyn UserInput,
    kind: &str,
    catalog: &Catalog,
) -> Result<Selection, InputError> {
    let prompt = prompt_for(kind);

    loop {
        let answer = match input.prompt_text(&prompt) {
            Ok(Some(answer)) => answer,
            Ok(None) => return Ok(Selection::Cancelled),
            Err(InputError::Interrupted) => return Ok(Selection::Interrupted),
            Err(e) => return Err(e),
        };

        let answer = answer.trim();
        if answer == CANCEL_TOKEN {
            return Ok(Selection::Cancelled);
        }
        if catalog.contains_key(answer) {
            return Ok(Selection::Key(answer.to_string()));
        }
        log::debug!("ignoring '{answer}', not a {kind} key");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::Entry;
    use crate::ui::ScriptedInput;
    use std::path::PathBuf;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for key in ["1", "2", "alg"] {
            catalog.insert(
                key.to_string(),
                Entry::new(key.to_string(), PathBuf::from("/d").join(key), None),
            );
        }
        catalog
    }

    #[test]
    fn test_prompt_text() {
        assert_eq!(
            prompt_for("books"),
            "books: type books (id) to preview | 'q' to return"
        );
    }

    #[test]
    fn test_valid_key_first_try() {
        let input = ScriptedInput::new(["2"]);
        let selection = select(&input, "books", &catalog()).unwrap();
        assert_eq!(selection, Selection::Key("2".to_string()));
        assert_eq!(input.prompts().len(), 1);
    }

    #[test]
    fn test_invalid_inputs_then_valid_key() {
        let input = ScriptedInput::new(["", "99", "ALG", "quit", " alg "]);
        let selection = select(&input, "books", &catalog()).unwrap();

        assert_eq!(selection.key(), Some("alg"));
        let prompts = input.prompts();
        assert_eq!(prompts.len(), 5);
        assert!(prompts.iter().all(|p| *p == prompt_for("books")));
    }

    #[test]
    fn test_cancel_token_wins_at_any_point() {
        let input = ScriptedInput::new(["x", "q", "1"]);
        let selection = select(&input, "rtfm", &catalog()).unwrap();
        assert_eq!(selection, Selection::Cancelled);
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn test_end_of_input_cancels() {
        let input = ScriptedInput::new(["nope"]);
        assert_eq!(select(&input, "books", &catalog()).unwrap(), Selection::Cancelled);
    }

    #[test]
    fn test_interrupt() {
        let input = ScriptedInput::interrupted_after(["bad"]);
        let selection = select(&input, "books", &catalog()).unwrap();
        assert_eq!(selection, Selection::Interrupted);
        assert!(selection.key().is_none());
    }
}
