//! Typed error definitions for the file bridge.
//! The Display text of each variant is the exact `error` string reported in
//! the bridge result map.

use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileOpError {
    /// A required bridge parameter was missing or empty.
    #[error("'{0}' parameter is required")]
    ParamRequired(&'static str),

    #[error("Source file does not exist")]
    SourceNotFound,

    #[error("Source is not a file")]
    SourceNotFile,

    /// Post-copy size comparison failed. The destination is left in whatever
    /// state the copy produced; callers must treat it as clobbered.
    #[error("Failed to verify file copy")]
    CopyVerification,

    /// Underlying filesystem failure, carrying the system error text with
    /// operation/path context and a platform hint where one applies.
    #[error("{message}")]
    Io { message: String },
}

impl FileOpError {
    /// Stable machine-readable code for structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            FileOpError::ParamRequired(_) => "param_required",
            FileOpError::SourceNotFound => "source_not_found",
            FileOpError::SourceNotFile => "source_not_file",
            FileOpError::CopyVerification => "copy_verification",
            FileOpError::Io { .. } => "io",
        }
    }
}

/// Adapter for `.map_err(...)`: converts an `io::Error` into `FileOpError::Io`
/// with the message "<op> '<path>': <error>", suffixed with a short hint for
/// error codes the platform backend recognizes.
pub(crate) fn io_context<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> FileOpError + 'a {
    move |e: io::Error| {
        let mut message = format!("{} '{}': {}", op, path.display(), e);
        if let Some(hint) = crate::platform::error_hint(&e) {
            message.push_str("; ");
            message.push_str(hint);
        }
        FileOpError::Io { message }
    }
}
