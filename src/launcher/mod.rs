//! Document launcher
//!
//! Hands a document to the platform's viewer as a detached process; the
//! viewer's exit is never awaited. Dispatch, in priority order:
//!
//! 1. Windows subsystem bridge: translate the path to host form and run the
//!    bridge command (`cmd.exe /c start "" <path>`)
//! 2. Native Windows: the shell's default file association
//! 3. Anything else: the configured open command (`xdg-open`)
//!
//! The bridge and open commands must resolve on `PATH`; there is no fallback
//! opener.

mod bridge;
mod platform;

pub use bridge::to_host_path;
pub use platform::{OsFamily, Platform, PlatformKind};

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Mutex;

use crate::config::{BridgeConfig, ShelfConfig};
use crate::{Result, ShelfError};

/// Something that can open a document
pub trait Launcher {
    /// Open `path` without waiting for the viewer
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::ExecutableNotFound` when the opener cannot be
    /// resolved, or `ShelfError::IoError` when it cannot be spawned.
    fn launch(&self, path: &Path) -> Result<()>;
}

/// Concrete action chosen for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPlan {
    /// Let the OS shell pick the associated application
    ShellAssociation(PathBuf),
    /// Run `program <path>`
    Opener { program: String, path: PathBuf },
    /// Run the bridge command with fully built arguments
    Bridge { program: PathBuf, args: Vec<String> },
}

/// Look `name` up on `PATH`; names containing a separator are checked as-is
#[must_use]
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

fn require_executable(name: &str) -> Result<PathBuf> {
    find_executable(name).ok_or_else(|| ShelfError::ExecutableNotFound(name.to_string()))
}

/// Launcher backed by the real operating system
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    platform: Platform,
    open_command: String,
    bridge: BridgeConfig,
}

impl SystemLauncher {
    #[must_use]
    pub fn new(platform: Platform, open_command: impl Into<String>, bridge: BridgeConfig) -> Self {
        Self {
            platform,
            open_command: open_command.into(),
            bridge,
        }
    }

    #[must_use]
    pub fn from_config(platform: Platform, config: &ShelfConfig) -> Self {
        Self::new(platform, config.open_command.clone(), config.bridge.clone())
    }

    /// Decide how `path` would be opened without opening it.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::ExecutableNotFound` if the opener for this
    /// platform is not on `PATH`, or `ShelfError::PathTranslation` if a bridge
    /// path has no host form.
    pub fn plan(&self, path: &Path) -> Result<LaunchPlan> {
        match self.platform.kind() {
            PlatformKind::Bridge => {
                let program = require_executable(&self.bridge.command)?;
                let host_path = to_host_path(
                    path,
                    self.bridge.local_root.as_deref(),
                    self.bridge.host_root.as_deref(),
                )?;
                Ok(LaunchPlan::Bridge {
                    program,
                    args: vec![
                        "/c".to_string(),
                        "start".to_string(),
                        String::new(),
                        host_path,
                    ],
                })
            }
            PlatformKind::Windows => Ok(LaunchPlan::ShellAssociation(path.to_path_buf())),
            PlatformKind::Unix => {
                require_executable(&self.open_command)?;
                Ok(LaunchPlan::Opener {
                    program: self.open_command.clone(),
                    path: path.to_path_buf(),
                })
            }
        }
    }
}

impl Launcher for SystemLauncher {
    fn launch(&self, path: &Path) -> Result<()> {
        let plan = self.plan(path)?;
        log::debug!("launch plan: {plan:?}");

        match plan {
            LaunchPlan::ShellAssociation(path) => open::that_detached(&path)?,
            LaunchPlan::Opener { program, path } => open::with_detached(&path, program)?,
            LaunchPlan::Bridge { program, args } => {
                Command::new(program)
                    .args(&args)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()?;
            }
        }
        Ok(())
    }
}

/// Launcher that only remembers what it was asked to open
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    launched: Mutex<Vec<PathBuf>>,
}

impl RecordingLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path passed to [`Launcher::launch`], in order
    #[must_use]
    pub fn launched(&self) -> Vec<PathBuf> {
        self.launched.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, path: &Path) -> Result<()> {
        if let Ok(mut launched) = self.launched.lock() {
            launched.push(path.to_path_buf());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::Shelf;

    fn bridge(command: &str) -> BridgeConfig {
        BridgeConfig {
            command: command.to_string(),
            local_root: Some(PathBuf::from("/home/reader")),
            host_root: Some(r"C:\Users\reader\MEGA".to_string()),
        }
    }

    fn unix() -> Platform {
        Platform::new(OsFamily::Unix, "6.8.0-generic")
    }

    fn wsl() -> Platform {
        Platform::new(OsFamily::Unix, "5.15.0-microsoft-standard-WSL2")
    }

    #[test]
    fn test_find_executable_missing() {
        assert!(find_executable("docshelf-no-such-opener-7f3a").is_none());
        assert!(find_executable("/no/such/dir/opener").is_none());
    }

    #[test]
    fn test_find_executable_explicit_path() {
        let shelf = Shelf::new();
        let opener = shelf.file("my-opener");
        let found = find_executable(&opener.to_string_lossy()).unwrap();
        assert_eq!(found, opener);
    }

    #[test]
    fn test_unix_plan_uses_open_command() {
        let shelf = Shelf::new();
        let opener = shelf.file("opener");
        let opener = opener.to_string_lossy().into_owned();

        let launcher = SystemLauncher::new(unix(), opener.clone(), bridge("cmd.exe"));
        let plan = launcher.plan(Path::new("/docs/a.pdf")).unwrap();
        assert_eq!(
            plan,
            LaunchPlan::Opener {
                program: opener,
                path: PathBuf::from("/docs/a.pdf"),
            }
        );
    }

    #[test]
    fn test_unix_missing_open_command() {
        let missing = "docshelf-no-such-opener-7f3a";
        let launcher = SystemLauncher::new(unix(), missing, bridge("cmd.exe"));
        let err = launcher.plan(Path::new("/docs/a.pdf")).unwrap_err();
        assert!(matches!(err, ShelfError::ExecutableNotFound(name) if name == missing));

        let err = launcher.launch(Path::new("/docs/a.pdf")).unwrap_err();
        assert!(matches!(err, ShelfError::ExecutableNotFound(_)));
    }

    #[test]
    fn test_windows_plan_uses_shell_association() {
        let launcher = SystemLauncher::new(
            Platform::new(OsFamily::Windows, ""),
            "docshelf-no-such-opener-7f3a",
            bridge("docshelf-no-such-bridge"),
        );
        let plan = launcher.plan(Path::new(r"C:\docs\a.pdf")).unwrap();
        assert_eq!(plan, LaunchPlan::ShellAssociation(PathBuf::from(r"C:\docs\a.pdf")));
    }

    #[test]
    fn test_bridge_plan_translates_path() {
        let shelf = Shelf::new();
        let cmd = shelf.file("cmd.exe");

        let launcher = SystemLauncher::new(wsl(), "xdg-open", bridge(&cmd.to_string_lossy()));
        let plan = launcher
            .plan(Path::new("/home/reader/docs/books/Algebra__alg/Lang__Algebra.pdf"))
            .unwrap();

        assert_eq!(
            plan,
            LaunchPlan::Bridge {
                program: cmd,
                args: vec![
                    "/c".to_string(),
                    "start".to_string(),
                    String::new(),
                    r"C:\Users\reader\MEGA\docs\books\Algebra__alg\Lang__Algebra.pdf".to_string(),
                ],
            }
        );
    }

    #[test]
    fn test_bridge_missing_command_is_fatal() {
        let launcher = SystemLauncher::new(wsl(), "xdg-open", bridge("docshelf-no-such-bridge"));
        let err = launcher.plan(Path::new("/home/reader/a.pdf")).unwrap_err();
        assert!(
            matches!(err, ShelfError::ExecutableNotFound(name) if name == "docshelf-no-such-bridge")
        );
    }

    #[test]
    fn test_recording_launcher() {
        let launcher = RecordingLauncher::new();
        launcher.launch(Path::new("/a.pdf")).unwrap();
        launcher.launch(Path::new("/b.pdf")).unwrap();
        assert_eq!(
            launcher.launched(),
            vec![PathBuf::from("/a.pdf"), PathBuf::from("/b.pdf")]
        );
    }
}
