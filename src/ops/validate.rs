//! Precondition checks and destination preparation shared by move and copy.
//! Check order is part of the contract: empty `from`, empty `to`, source
//! existence, source type; the first failure wins.

use std::fs;
use std::io;
use std::path::Path;

use crate::errors::{FileOpError, io_context};

/// Reject an empty parameter value; returns the path view otherwise.
pub(crate) fn require_path<'a>(
    value: &'a str,
    param: &'static str,
) -> Result<&'a Path, FileOpError> {
    if value.is_empty() {
        return Err(FileOpError::ParamRequired(param));
    }
    Ok(Path::new(value))
}

/// Source must exist and be a regular file. Symlinks are followed, so a link
/// to a file passes and a link to a directory does not; a dangling link
/// reads as missing.
pub(crate) fn checked_source(from: &Path) -> Result<(), FileOpError> {
    let meta = match fs::metadata(from) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(FileOpError::SourceNotFound),
        Err(e) => return Err(io_context("stat source", from)(e)),
    };
    if !meta.is_file() {
        return Err(FileOpError::SourceNotFile);
    }
    Ok(())
}

/// Make room at the destination: create missing parent directories, then
/// remove an existing destination file. Overwrite-by-delete is the contract;
/// the prior destination is gone even if the write that follows fails.
pub(crate) fn prepare_destination(to: &Path) -> Result<(), FileOpError> {
    if let Some(parent) = to.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_context("create destination directory", parent))?;
    }

    match fs::remove_file(to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_context("remove existing destination", to)(e)),
    }
}

/// Post-copy verification: the destination must exist and match the source
/// byte length. Size equality only; same-size corruption is not detected.
pub(crate) fn verify_copy(from: &Path, to: &Path) -> Result<u64, FileOpError> {
    let Ok(dest_len) = fs::metadata(to).map(|m| m.len()) else {
        return Err(FileOpError::CopyVerification);
    };
    let Ok(src_len) = fs::metadata(from).map(|m| m.len()) else {
        return Err(FileOpError::CopyVerification);
    };
    if dest_len == src_len {
        Ok(dest_len)
    } else {
        Err(FileOpError::CopyVerification)
    }
}
