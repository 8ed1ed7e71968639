//! User input abstraction layer
//!
//! Prompts go through the [`UserInput`] trait so the selection loop can be
//! driven by a terminal, by piped stdin, or by a scripted sequence in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use docshelf::ui::input::{DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
/// let prompt = "books: type books (id) to preview | 'q' to return";
/// if let Some(answer) = input.prompt_text(prompt).unwrap() {
///     println!("picked {answer}");
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Prompt user for one line of text
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - User entered text (possibly empty)
    /// * `Ok(None)` - Input is exhausted (end of stream)
    /// * `Err(InputError::Interrupted)` - User pressed Ctrl+C
    /// * `Err(_)` - Input operation failed
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input interrupted by the user (Ctrl+C)
    #[error("Input interrupted by user")]
    Interrupted,
}

impl InputError {
    fn from_io(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::Interrupted {
            Self::Interrupted
        } else {
            Self::Io(e)
        }
    }
}

// console reports Ctrl+C in raw mode as `ErrorKind::Interrupted`
impl From<dialoguer::Error> for InputError {
    fn from(e: dialoguer::Error) -> Self {
        let dialoguer::Error::IO(e) = e;
        Self::from_io(e)
    }
}

/// Terminal input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>> {
        use dialoguer::Input;

        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map(Some)
            .map_err(InputError::from)
    }
}

/// Line-oriented input for non-terminal stdin (pipes, redirects)
pub struct StdinInput;

impl StdinInput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for StdinInput {
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>> {
        println!("{prompt}");
        io::stdout().flush().map_err(InputError::from_io)?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(InputError::from_io)?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Input that replays a fixed list of answers and records every prompt
///
/// Once the answers run out it reports end of input.
///
/// # Examples
///
/// ```
/// use docshelf::ui::input::{ScriptedInput, UserInput};
///
/// let input = ScriptedInput::new(["x", "1"]);
/// assert_eq!(input.prompt_text("pick").unwrap().as_deref(), Some("x"));
/// assert_eq!(input.prompts(), vec!["pick".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: Mutex<VecDeque<Option<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedInput {
    /// Replay `answers` in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(|a| Some(a.into())).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Replay `answers`, then simulate Ctrl+C on the next prompt
    pub fn interrupted_after<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let input = Self::new(answers);
        if let Ok(mut queue) = input.answers.lock() {
            queue.push_back(None);
        }
        input
    }

    /// Every prompt shown so far
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// Answers not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or(0)
    }
}

impl UserInput for ScriptedInput {
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        let next = self
            .answers
            .lock()
            .map_err(|_| InputError::Io(io::Error::other("scripted input poisoned")))?
            .pop_front();

        match next {
            Some(Some(answer)) => Ok(Some(answer)),
            Some(None) => Err(InputError::Interrupted),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_from_io() {
        let io_err = io::Error::other("test error");
        let input_err: InputError = io_err.into();
        assert!(matches!(input_err, InputError::Io(_)));
    }

    #[test]
    fn test_interrupted_io_maps_to_interrupted() {
        let io_err = io::Error::new(io::ErrorKind::Interrupted, "read interrupted");
        assert!(matches!(InputError::from_io(io_err), InputError::Interrupted));
    }

    #[test]
    fn test_dialoguer_ctrl_c_maps_to_interrupted() {
        let err = dialoguer::Error::IO(io::Error::from(io::ErrorKind::Interrupted));
        assert!(matches!(InputError::from(err), InputError::Interrupted));
    }

    #[test]
    fn test_dialoguer_io_failure_stays_io() {
        let err = dialoguer::Error::IO(io::Error::from(io::ErrorKind::BrokenPipe));
        match InputError::from(err) {
            InputError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_dialoguer_input_creation() {
        let _input = DialoguerInput::new();
        let _input2 = DialoguerInput::default();
    }

    #[test]
    fn test_scripted_input_replays_then_ends() {
        let input = ScriptedInput::new(["a", "b"]);
        assert_eq!(input.prompt_text("p1").unwrap().as_deref(), Some("a"));
        assert_eq!(input.prompt_text("p2").unwrap().as_deref(), Some("b"));
        assert!(input.prompt_text("p3").unwrap().is_none());
        assert_eq!(input.prompts(), vec!["p1", "p2", "p3"]);
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_scripted_input_interrupt() {
        let input = ScriptedInput::interrupted_after(["a"]);
        assert!(input.prompt_text("p").is_ok());
        assert!(matches!(input.prompt_text("p"), Err(InputError::Interrupted)));
    }
}
