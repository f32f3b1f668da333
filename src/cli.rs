//! CLI definition for the desktop harness.
//! The binary stands in for a host shell: it routes a function name to the
//! matching bridge function and prints the result map as JSON.
//!
//! Exit status mirrors the result map for scripting: 0 on success, 1 when
//! the result map reports failure.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use file_bridge::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Invoke a file bridge function (File.Move, File.Copy) from the desktop"
)]
pub struct Args {
    /// Bridge function name, e.g. "File.Move" or "File.Copy".
    #[arg(value_name = "FUNCTION", required_unless_present = "list")]
    pub function: Option<String>,

    /// Source file path (absolute; relative resolution is the caller's job).
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub from: Option<String>,

    /// Destination file path (absolute). Missing parent directories are created.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::AnyPath)]
    pub to: Option<String>,

    /// Set log level: quiet, normal, verbose, debug.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Append logs to this file in addition to stdout.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json_logs: bool,

    /// List the bridge function names and exit.
    #[arg(long)]
    pub list: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
