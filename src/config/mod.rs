//! Configuration module for docshelf
//!
//! Holds the collection roots, the open commands and display settings.
//! Configuration is stored in the user's config directory
//! (`~/.config/docshelf/config.toml` on Linux).
//!
//! ```toml
//! default_collection = "books"
//! wrap_width = 80
//! open_command = "xdg-open"
//!
//! [bridge]
//! command = "cmd.exe"
//! local_root = "/home/reader"
//! host_root = 'C:\Users\reader\Documents\MEGA'
//!
//! [collections.books]
//! root = "/home/reader/docs/books"
//! windows_root = 'C:\Users\reader\Documents\MEGA\docs\books'
//!
//! [collections.rtfm]
//! root = "/home/reader/docs/rtfm"
//! layout = "flat"
//! style = "plain"
//! ```

mod setup;

pub use setup::first_time_setup;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::ShelfError;
use crate::launcher::Platform;
use crate::output::DEFAULT_WRAP_WIDTH;

/// How a collection root is organised
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Root holds `name__key` subdirectories of documents
    #[default]
    Nested,
    /// Root holds documents directly
    Flat,
}

/// How document file names are decoded and displayed
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStyle {
    /// `authors__title` stems, listed as `"<authors>. <title>."`
    #[default]
    Authored,
    /// Whole stem is the title
    Plain,
}

/// One browsable collection
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Root directory on Unix-like hosts (and the fallback everywhere)
    pub root: PathBuf,

    /// Root directory on native Windows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows_root: Option<PathBuf>,

    #[serde(default)]
    pub layout: Layout,

    #[serde(default)]
    pub style: DocumentStyle,
}

impl CollectionConfig {
    #[must_use]
    pub const fn new(root: PathBuf, layout: Layout, style: DocumentStyle) -> Self {
        Self {
            root,
            windows_root: None,
            layout,
            style,
        }
    }

    /// Root to browse on `platform`
    #[must_use]
    pub fn root_for(&self, platform: &Platform) -> &Path {
        match &self.windows_root {
            Some(root) if platform.is_windows() => root,
            _ => &self.root,
        }
    }
}

fn default_bridge_command() -> String {
    "cmd.exe".to_string()
}

/// Settings for opening documents from inside the Windows subsystem
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Host command used to open translated paths
    #[serde(default = "default_bridge_command")]
    pub command: String,

    /// Subsystem-side prefix that `host_root` replaces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_root: Option<PathBuf>,

    /// Host-side directory corresponding to `local_root`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_root: Option<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            command: default_bridge_command(),
            local_root: dirs::home_dir(),
            host_root: None,
        }
    }
}

fn default_collection_name() -> String {
    "books".to_string()
}

const fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

fn default_open_command() -> String {
    "xdg-open".to_string()
}

fn default_collections() -> BTreeMap<String, CollectionConfig> {
    let docs = dirs::home_dir().unwrap_or_default().join("docs");
    ShelfConfig::collections_under(&docs)
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShelfConfig {
    /// Collection browsed when none is given on the command line
    #[serde(default = "default_collection_name")]
    pub default_collection: String,

    /// Column at which document listings wrap
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    /// Desktop open utility used on native Unix hosts
    #[serde(default = "default_open_command")]
    pub open_command: String,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    #[serde(default)]
    pub bridge: BridgeConfig,

    /// Collections by name
    #[serde(default = "default_collections")]
    pub collections: BTreeMap<String, CollectionConfig>,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            default_collection: default_collection_name(),
            wrap_width: default_wrap_width(),
            open_command: default_open_command(),
            quiet: false,
            bridge: BridgeConfig::default(),
            collections: default_collections(),
        }
    }
}

impl ShelfConfig {
    /// The stock collections, rooted at `docs/<name>`
    #[must_use]
    pub fn collections_under(docs: &Path) -> BTreeMap<String, CollectionConfig> {
        [
            ("books", Layout::Nested, DocumentStyle::Authored),
            ("papers", Layout::Nested, DocumentStyle::Authored),
            ("rtfm", Layout::Flat, DocumentStyle::Plain),
            ("notes", Layout::Nested, DocumentStyle::Plain),
        ]
        .into_iter()
        .map(|(name, layout, style)| {
            (
                name.to_string(),
                CollectionConfig::new(docs.join(name), layout, style),
            )
        })
        .collect()
    }

    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("docshelf").join("config.toml"))
    }

    /// Load configuration from an explicit file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the user's config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    /// and `interactive` is set
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup(interactive: bool) -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else if interactive {
            first_time_setup()
        } else {
            Ok(Self::default())
        }
    }

    /// Get a collection by name
    #[must_use]
    pub fn get_collection(&self, name: &str) -> Option<&CollectionConfig> {
        self.collections.get(name)
    }

    /// List all collection names in sorted order
    #[must_use]
    pub fn list_collections(&self) -> Vec<&String> {
        self.collections.keys().collect()
    }

    /// Get a collection by name, naming the configured ones when it is missing
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::UnknownCollection` if `name` is not configured.
    pub fn require_collection(&self, name: &str) -> crate::Result<&CollectionConfig> {
        self.get_collection(name).ok_or_else(|| {
            let available: Vec<&str> =
                self.list_collections().into_iter().map(String::as_str).collect();
            ShelfError::UnknownCollection {
                name: name.to_string(),
                available: available.join(", "),
            }
        })
    }
}
