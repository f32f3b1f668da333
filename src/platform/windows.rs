//! Windows backend: rename through `MoveFileExW` with replace semantics
//! (plain MoveFile refuses to overwrite), and Win32 code classification.

use std::io;
use std::iter;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use windows_sys::Win32::Storage::FileSystem::{MOVEFILE_REPLACE_EXISTING, MoveFileExW};

/// Rename `src` over `dst`, replacing an existing destination.
pub fn rename_file(src: &Path, dst: &Path) -> io::Result<()> {
    let src_w = to_wide(src);
    let dst_w = to_wide(dst);
    let ok = unsafe { MoveFileExW(src_w.as_ptr(), dst_w.as_ptr(), MOVEFILE_REPLACE_EXISTING) };
    if ok == 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}

/// True for ERROR_NOT_SAME_DEVICE: a move across volumes.
pub fn is_cross_device(e: &io::Error) -> bool {
    e.raw_os_error() == Some(17) // ERROR_NOT_SAME_DEVICE
}

/// Short actionable hint for common Win32 error codes, if one applies.
pub fn error_hint(e: &io::Error) -> Option<&'static str> {
    match e.raw_os_error()? {
        5 => Some("access denied; check permissions"), // ERROR_ACCESS_DENIED
        2 | 3 => Some("path not found; verify it exists"), // FILE/PATH NOT FOUND
        17 => Some("not same device; cross-filesystem move"), // ERROR_NOT_SAME_DEVICE
        19 => Some("write protected / read-only media"), // ERROR_WRITE_PROTECT
        32 => Some("sharing violation; file is in use"), // ERROR_SHARING_VIOLATION
        112 => Some("insufficient disk space"),       // ERROR_DISK_FULL
        206 => Some("filename or path too long"),     // ERROR_FILENAME_EXCED_RANGE
        _ => None,
    }
}

fn to_wide(path: &Path) -> Vec<u16> {
    path.as_os_str().encode_wide().chain(iter::once(0)).collect()
}
