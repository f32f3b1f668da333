//! Streaming file copy.
//!
//! Writes directly to the destination path: the contract clears the
//! destination beforehand, and a failed copy leaves whatever partial file it
//! produced in place, so no temp-file indirection is used.
//! Buffered 1 MiB reads/writes; the destination is flushed and fsynced before
//! returning so the size check that follows reads settled metadata.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

const BUF_SIZE: usize = 1024 * 1024;

/// Copy `src` to `dst` from start to EOF, returning the bytes written.
/// Both handles are dropped on every exit path. The source is read once; a
/// file that grows mid-copy contributes only the bytes seen before EOF.
pub(crate) fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    Ok(bytes)
}
