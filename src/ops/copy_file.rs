//! File copy: whole-file duplication with post-copy size verification.
//! The source is never removed.

use tracing::info;

use crate::errors::{FileOpError, io_context};

use super::io_copy;
use super::validate::{checked_source, prepare_destination, require_path, verify_copy};

/// Copy a single file from `from` to `to`, overwriting any existing
/// destination and creating missing parent directories. Returns the byte
/// length confirmed by the post-copy size check.
pub fn copy_file(from: &str, to: &str) -> Result<u64, FileOpError> {
    let from = require_path(from, "from")?;
    let to = require_path(to, "to")?;
    checked_source(from)?;
    prepare_destination(to)?;

    io_copy::copy_streaming(from, to).map_err(io_context("copy to destination", to))?;
    let bytes = verify_copy(from, to)?;
    info!(from = %from.display(), to = %to.display(), bytes, "copied");
    Ok(bytes)
}
