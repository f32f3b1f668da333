//! Native file bridge: move and copy of a single file, exposed to an
//! embedded web UI layer as the named functions `File.Move` and `File.Copy`.
//!
//! This crate is the function side of the bridge only; the host shell owns
//! dispatch/registration and the web-facing proxy. Calls run synchronously,
//! validate defensively, overwrite destinations, and report through a
//! `{success, error?}` result map. Move prefers an atomic rename and falls
//! back to copy + delete when the rename fails (cross-filesystem moves).

pub mod bridge;
pub mod config;
pub mod errors;
pub mod ops;
pub mod output;
pub mod platform;

pub use bridge::{BridgeFunction, OperationResult, Params};
pub use config::{BridgeConfig, LogLevel};
pub use errors::FileOpError;
pub use ops::{MoveOutcome, copy_file, move_file};
