//! Host platform descriptor
//!
//! Detected once at startup and passed down, so launch decisions are plain
//! functions of a value rather than of global environment state.

use std::fs;

/// Operating system family the binary runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Unix,
}

/// How documents get opened on this host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    /// Linux running inside the Windows subsystem
    Bridge,
    /// Native Windows
    Windows,
    /// Native Linux/Unix desktop
    Unix,
}

/// Snapshot of the facts launch dispatch depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub family: OsFamily,
    /// Kernel release string (`uname -r`), empty when unknown
    pub kernel_release: String,
}

impl Platform {
    #[must_use]
    pub fn new(family: OsFamily, kernel_release: impl Into<String>) -> Self {
        Self {
            family,
            kernel_release: kernel_release.into(),
        }
    }

    /// Describe the running host
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(windows) {
            return Self::new(OsFamily::Windows, "");
        }

        let release = fs::read_to_string("/proc/sys/kernel/osrelease")
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        Self::new(OsFamily::Unix, release)
    }

    /// Linux kernels built for the Windows subsystem carry "microsoft" in
    /// their release string
    #[must_use]
    pub fn is_bridge(&self) -> bool {
        self.family == OsFamily::Unix && self.kernel_release.to_lowercase().contains("microsoft")
    }

    #[must_use]
    pub fn is_windows(&self) -> bool {
        self.family == OsFamily::Windows
    }

    /// Dispatch class, bridge first
    #[must_use]
    pub fn kind(&self) -> PlatformKind {
        if self.is_bridge() {
            PlatformKind::Bridge
        } else if self.is_windows() {
            PlatformKind::Windows
        } else {
            PlatformKind::Unix
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_detection() {
        let wsl = Platform::new(OsFamily::Unix, "5.15.153.1-microsoft-standard-WSL2");
        assert!(wsl.is_bridge());
        assert_eq!(wsl.kind(), PlatformKind::Bridge);

        let old_wsl = Platform::new(OsFamily::Unix, "4.4.0-19041-Microsoft");
        assert_eq!(old_wsl.kind(), PlatformKind::Bridge);
    }

    #[test]
    fn test_native_kinds() {
        assert_eq!(
            Platform::new(OsFamily::Unix, "6.8.0-45-generic").kind(),
            PlatformKind::Unix
        );
        assert_eq!(Platform::new(OsFamily::Windows, "").kind(), PlatformKind::Windows);
        assert_eq!(Platform::new(OsFamily::Unix, "").kind(), PlatformKind::Unix);
    }

    #[test]
    fn test_detect_matches_build_target() {
        let platform = Platform::detect();
        assert_eq!(platform.is_windows(), cfg!(windows));
    }
}
