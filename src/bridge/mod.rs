//! Bridge call contract.
//!
//! A bridge function is addressed by a stable dotted name and invoked with a
//! key-value parameter map; it answers with a result map and nothing else.
//! The host-side dispatch that routes names to functions belongs to the
//! application shell, not to this crate.

mod file;

pub use file::{Copy, Move};

use serde::Serialize;
use serde_json::{Map, Value};

/// Parameter map handed over by the host shell.
pub type Params = Map<String, Value>;

/// Result map shape for every bridge call. `error` is omitted from the
/// serialized map when the call succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OperationResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// A named operation the host shell exposes to its embedded UI layer.
///
/// Implementations run synchronously on the calling thread, must not panic,
/// and report every failure through the result map rather than any other
/// channel.
pub trait BridgeFunction {
    /// Stable dotted name the host routes on, e.g. "File.Move".
    fn name(&self) -> &'static str;

    fn execute(&self, params: &Params) -> OperationResult;
}

/// Fetch a string parameter. Missing keys and non-string values read as ""
/// so the shared validation reports them as required-parameter failures.
pub(crate) fn str_param<'a>(params: &'a Params, key: &str) -> &'a str {
    params.get(key).and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn str_param_coerces_missing_and_non_string_to_empty() {
        let mut params = Params::new();
        params.insert("from".into(), json!(42));
        params.insert("to".into(), json!("/tmp/x"));

        assert_eq!(str_param(&params, "from"), "");
        assert_eq!(str_param(&params, "to"), "/tmp/x");
        assert_eq!(str_param(&params, "absent"), "");
    }

    #[test]
    fn success_result_omits_error_key() {
        let json = serde_json::to_string(&OperationResult::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn failure_result_carries_error() {
        let json = serde_json::to_string(&OperationResult::fail("boom")).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"boom"}"#);
    }
}
