//! Unix backend: POSIX rename plus destination-directory fsync, and errno
//! classification for cross-device detection and error hints.

use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Rename `src` over `dst` atomically. POSIX rename replaces an existing
/// destination on its own; afterwards the parent directory is fsynced
/// (best-effort) so the rename itself reaches stable storage.
pub fn rename_file(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)?;
    if let Some(parent) = dst.parent() {
        // Ignore fsync errors so a successful rename is not turned into a failure.
        let _ = fsync_dir(parent);
    }
    Ok(())
}

/// True when the error is EXDEV: a rename across filesystems/volumes.
pub fn is_cross_device(e: &io::Error) -> bool {
    e.raw_os_error() == Some(libc::EXDEV)
}

/// Short actionable hint for common errno values, if one applies.
pub fn error_hint(e: &io::Error) -> Option<&'static str> {
    match e.raw_os_error()? {
        libc::EACCES | libc::EPERM => {
            Some("permission denied; check ownership and write permissions")
        }
        libc::EXDEV => Some("cross-filesystem; atomic rename not possible"),
        libc::ENOENT => Some("path not found; verify it exists"),
        libc::EISDIR => Some("path is a directory"),
        libc::ENOSPC => Some("insufficient space on device"),
        libc::EROFS => Some("read-only filesystem; cannot write here"),
        libc::ENAMETOOLONG => Some("filename or path too long; shorten path segments"),
        _ => None,
    }
}

fn fsync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn rename_replaces_existing_destination() {
        let td = tempdir().unwrap();
        let src = td.path().join("src.txt");
        let dst = td.path().join("dst.txt");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"old").unwrap();

        rename_file(&src, &dst).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read(&dst).unwrap(), b"new");
    }

    #[test]
    fn cross_device_detection_matches_exdev_only() {
        let exdev = io::Error::from_raw_os_error(libc::EXDEV);
        let enoent = io::Error::from_raw_os_error(libc::ENOENT);
        assert!(is_cross_device(&exdev));
        assert!(!is_cross_device(&enoent));
    }

    #[test]
    fn hint_for_exdev_mentions_filesystem() {
        let exdev = io::Error::from_raw_os_error(libc::EXDEV);
        assert!(error_hint(&exdev).unwrap().contains("cross-filesystem"));
    }
}
