//! Interactive setup wizard for first-time configuration
//!
//! Runs when docshelf starts on a terminal and no config file exists yet.

use std::path::PathBuf;

use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};

use super::ShelfConfig;

/// Interactive first-time setup - prompts for the documents root
///
/// The stock collections (`books`, `papers`, `rtfm`, `notes`) are placed
/// under the chosen directory and the configuration is saved.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The home directory cannot be determined
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<ShelfConfig, ConfigError> {
    println!("Welcome to docshelf! Let's point it at your documents.\n");

    let default_docs = dirs::home_dir()
        .ok_or_else(|| ConfigError::Message("Could not determine home directory".to_string()))?
        .join("docs");

    let docs: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Documents root")
        .default(default_docs.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let open_command: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Open command")
        .default("xdg-open".to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = ShelfConfig {
        open_command,
        collections: ShelfConfig::collections_under(&PathBuf::from(docs)),
        ..ShelfConfig::default()
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
