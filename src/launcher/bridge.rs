//! Path translation for the Windows subsystem bridge
//!
//! Documents live on the Linux side of the bridge but are opened by a native
//! Windows viewer, so their paths are rewritten into drive/back-slash form
//! before dispatch.

use std::path::{Component, Path};

use crate::{Result, ShelfError};

fn join_components(path: &Path) -> Option<String> {
    let parts: Option<Vec<String>> = path
        .components()
        .map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    parts.map(|p| p.join("\\"))
}

/// `/mnt/c/Users/x/file.pdf` -> `C:\Users\x\file.pdf`
fn from_mount(path: &Path) -> Option<String> {
    let rest = path.strip_prefix("/mnt").ok()?;
    let mut components = rest.components();
    let Some(Component::Normal(drive)) = components.next() else {
        return None;
    };
    let drive = drive.to_str()?;
    if drive.len() != 1 || !drive.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let tail = join_components(components.as_path())?;
    Some(format!("{}:\\{tail}", drive.to_ascii_uppercase()))
}

/// Rewrite a subsystem path into host form.
///
/// When both roots are configured and `path` lies under `local_root`, the
/// remainder is appended to `host_root`. Otherwise paths on mounted host
/// drives (`/mnt/<drive>/...`) map to their drive letter.
///
/// # Errors
///
/// Returns `ShelfError::PathTranslation` if neither rule applies.
pub fn to_host_path(
    path: &Path,
    local_root: Option<&Path>,
    host_root: Option<&str>,
) -> Result<String> {
    if let (Some(local_root), Some(host_root)) = (local_root, host_root)
        && let Ok(rest) = path.strip_prefix(local_root)
        && let Some(tail) = join_components(rest)
    {
        let host_root = host_root.trim_end_matches('\\');
        return Ok(if tail.is_empty() {
            host_root.to_string()
        } else {
            format!("{host_root}\\{tail}")
        });
    }

    from_mount(path).ok_or_else(|| ShelfError::PathTranslation(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = r"C:\Users\reader\Documents\MEGA";

    #[test]
    fn test_translate_under_local_root() {
        let path = Path::new("/home/reader/docs/books/Algebra__alg/Lang__Algebra.pdf");
        let host = to_host_path(path, Some(Path::new("/home/reader")), Some(HOST)).unwrap();
        assert_eq!(
            host,
            r"C:\Users\reader\Documents\MEGA\docs\books\Algebra__alg\Lang__Algebra.pdf"
        );
    }

    #[test]
    fn test_trailing_backslash_on_host_root() {
        let path = Path::new("/home/reader/a.pdf");
        let host = to_host_path(path, Some(Path::new("/home/reader")), Some(r"D:\shelf\")).unwrap();
        assert_eq!(host, r"D:\shelf\a.pdf");
    }

    #[test]
    fn test_translate_mounted_drive() {
        let path = Path::new("/mnt/d/library/Knuth__TAOCP.djvu");
        assert_eq!(to_host_path(path, None, None).unwrap(), r"D:\library\Knuth__TAOCP.djvu");
    }

    #[test]
    fn test_mount_used_outside_local_root() {
        let path = Path::new("/mnt/c/x.pdf");
        let host = to_host_path(path, Some(Path::new("/home/reader")), Some(HOST)).unwrap();
        assert_eq!(host, r"C:\x.pdf");
    }

    #[test]
    fn test_untranslatable_path() {
        let path = Path::new("/srv/docs/a.pdf");
        let err = to_host_path(path, Some(Path::new("/home/reader")), Some(HOST)).unwrap_err();
        assert!(matches!(err, ShelfError::PathTranslation(p) if p == path));

        assert!(to_host_path(Path::new("/mnt/wsl/a.pdf"), None, None).is_err());
    }
}
