//! Bridge functions in the "File.*" namespace.
//! Each one parses its parameters, logs the request before validation, and
//! folds every outcome of the underlying operation into the result map.

use tracing::{debug, error, info};

use crate::ops;

use super::{BridgeFunction, OperationResult, Params, str_param};

/// `File.Move`: relocate a single file, overwriting the destination.
pub struct Move;

impl BridgeFunction for Move {
    fn name(&self) -> &'static str {
        "File.Move"
    }

    fn execute(&self, params: &Params) -> OperationResult {
        let from = str_param(params, "from");
        let to = str_param(params, "to");
        debug!(function = self.name(), from, to, "move requested");

        match ops::move_file(from, to) {
            Ok(outcome) => {
                info!(function = self.name(), ?outcome, "move completed");
                OperationResult::ok()
            }
            Err(e) => {
                error!(function = self.name(), code = e.code(), error = %e, "move failed");
                OperationResult::fail(e.to_string())
            }
        }
    }
}

/// `File.Copy`: duplicate a single file, overwriting the destination. The
/// source is never removed.
pub struct Copy;

impl BridgeFunction for Copy {
    fn name(&self) -> &'static str {
        "File.Copy"
    }

    fn execute(&self, params: &Params) -> OperationResult {
        let from = str_param(params, "from");
        let to = str_param(params, "to");
        debug!(function = self.name(), from, to, "copy requested");

        match ops::copy_file(from, to) {
            Ok(bytes) => {
                info!(function = self.name(), bytes, "copy completed");
                OperationResult::ok()
            }
            Err(e) => {
                error!(function = self.name(), code = e.code(), error = %e, "copy failed");
                OperationResult::fail(e.to_string())
            }
        }
    }
}
