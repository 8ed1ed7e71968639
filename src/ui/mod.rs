//! UI abstraction layer
//!
//! Terminal interaction is split behind two traits so the browser can be
//! driven without a terminal:
//!
//! - **`UserInput`** - line prompts (dialoguer on a TTY, plain stdin otherwise)
//! - **`OutputWriter`** - listings and status messages with severity levels
//!
//! [`default_input`] picks the right input backend for the current stdin.
//! [`exit_on_interrupt`] makes Ctrl+C a clean exit wherever it lands.

pub mod input;
pub mod output;

pub use input::{DialoguerInput, InputError, ScriptedInput, StdinInput, UserInput};
pub use output::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};

use std::io::IsTerminal;

/// Dialoguer prompts on an interactive terminal, plain line reads otherwise
#[must_use]
pub fn default_input() -> Box<dyn UserInput> {
    if std::io::stdin().is_terminal() {
        Box::new(DialoguerInput::new())
    } else {
        Box::new(StdinInput::new())
    }
}

/// Exit with status 0 on SIGINT.
///
/// Dialoguer prompts read Ctrl+C as a key in raw mode and report it as
/// [`InputError::Interrupted`]; everywhere else (plain stdin reads, between
/// prompts) the signal reaches this handler instead.
///
/// # Errors
///
/// Returns `ctrlc::Error` if a handler is already installed or the signal
/// cannot be hooked.
pub fn exit_on_interrupt() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        log::debug!("interrupted, exiting");
        std::process::exit(0);
    })
}
