//! docshelf CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # List collections of the default collection kind and pick one
//! docshelf
//!
//! # Jump straight into the "alg" collection
//! docshelf alg
//!
//! # Only documents whose name contains "galois"
//! docshelf alg galois
//!
//! # Browse another configured collection
//! docshelf -c rtfm bash
//! ```
//!
//! # Configuration
//!
//! On first run from a terminal, docshelf asks where the documents live.
//! Configuration is stored in the user's config directory
//! (`~/.config/docshelf/config.toml` on Linux).

use std::io::IsTerminal;
use std::process::ExitCode;

use docshelf::{
    ShelfError,
    browse::{BrowseOutcome, Browser, Profile},
    cli::Cli,
    config::ShelfConfig,
    launcher::{Platform, SystemLauncher},
    ui::{self, OutputWriter, StdoutWriter},
};

type Result<T> = std::result::Result<T, ShelfError>;

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    // Explicit flags win over RUST_LOG
    if cli.verbose || cli.quiet {
        builder.filter_level(cli.log_level());
    }
    builder.target(env_logger::Target::Stderr).init();
}

/// Resolve the collection, build the browser and run one session
///
/// # Errors
///
/// Returns `ShelfError` if the collection is unknown or its root is invalid,
/// or browsing fails.
fn run(cli: &Cli, config: &ShelfConfig, output: &dyn OutputWriter) -> Result<BrowseOutcome> {
    let platform = Platform::detect();
    log::debug!("platform: {platform:?}");

    let name = cli
        .collection
        .clone()
        .unwrap_or_else(|| config.default_collection.clone());
    let collection = config.require_collection(&name)?;

    let profile = Profile::from_config(&name, collection);
    let root = collection.root_for(&platform);
    let wrap_width = cli.wrap.unwrap_or(config.wrap_width);

    let input = ui::default_input();
    let launcher = SystemLauncher::from_config(platform, config);

    let browser = Browser::new(profile, root, input.as_ref(), output, &launcher)?
        .with_wrap_width(wrap_width);
    browser.run(cli.selection_state())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(&cli);

    if let Err(e) = ui::exit_on_interrupt() {
        log::warn!("cannot install interrupt handler: {e}");
    }

    let config = match ShelfConfig::load_or_setup(std::io::stdin().is_terminal()) {
        Ok(config) => config,
        Err(e) => {
            StdoutWriter::new().error(&ShelfError::from(e).to_string());
            return ExitCode::FAILURE;
        }
    };

    let output = StdoutWriter::quiet(cli.quiet || config.quiet);

    match run(&cli, &config, &output) {
        // opened, cancelled and Ctrl+C all exit cleanly
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
