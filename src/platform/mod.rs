//! Platform backends.
//! Two implementations of one primitive API, selected at build time, so the
//! move/copy policy above stays platform-agnostic. Each backend supplies the
//! native rename, cross-device detection, and error-code hints; the
//! validation/overwrite/verification policy is shared and lives in `ops`.

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::{error_hint, is_cross_device, rename_file};
#[cfg(windows)]
pub use windows::{error_hint, is_cross_device, rename_file};
