//! File move: atomic rename first, copy+delete fallback.
//! The fallback covers any rename failure; cross-device is the expected
//! cause and is called out in the logs when the backend recognizes it.

use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::errors::{FileOpError, io_context};
use crate::platform;

use super::io_copy;
use super::validate::{checked_source, prepare_destination, require_path, verify_copy};

/// How a move reached the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Single atomic rename.
    Renamed,
    /// Rename failed; emulated by a full copy, size verification, and
    /// deletion of the source.
    CopiedAndRemoved,
}

/// Move a single file from `from` to `to`, overwriting any existing
/// destination and creating missing parent directories.
///
/// Precondition failures and filesystem errors come back as [`FileOpError`];
/// a fallback copy whose size does not match the source reports
/// [`FileOpError::CopyVerification`] and leaves both files as the copy left
/// them.
pub fn move_file(from: &str, to: &str) -> Result<MoveOutcome, FileOpError> {
    let from = require_path(from, "from")?;
    let to = require_path(to, "to")?;
    checked_source(from)?;
    prepare_destination(to)?;

    match platform::rename_file(from, to) {
        Ok(()) => {
            info!(from = %from.display(), to = %to.display(), "moved by atomic rename");
            Ok(MoveOutcome::Renamed)
        }
        Err(e) => {
            let hint = if platform::is_cross_device(&e) {
                "cross-device rename; copying instead"
            } else {
                "falling back to copy + delete"
            };
            warn!(error = %e, hint, "atomic rename failed");
            move_by_copy(from, to)
        }
    }
}

fn move_by_copy(from: &Path, to: &Path) -> Result<MoveOutcome, FileOpError> {
    io_copy::copy_streaming(from, to).map_err(io_context("copy to destination", to))?;
    verify_copy(from, to)?;
    fs::remove_file(from).map_err(io_context("remove source file", from))?;
    info!(from = %from.display(), to = %to.display(), "moved by copy + delete");
    Ok(MoveOutcome::CopiedAndRemoved)
}
