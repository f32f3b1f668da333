//! Bridge-surface tests: parameter-map handling and result-map shape for
//! the File.* functions.

use serde_json::{Value, json};
use std::fs;

use file_bridge::bridge::{BridgeFunction, Copy, Move};
use file_bridge::Params;

fn params(from: Option<&str>, to: Option<&str>) -> Params {
    let mut map = Params::new();
    if let Some(from) = from {
        map.insert("from".into(), json!(from));
    }
    if let Some(to) = to {
        map.insert("to".into(), json!(to));
    }
    map
}

#[test]
fn function_names_are_stable() {
    assert_eq!(Move.name(), "File.Move");
    assert_eq!(Copy.name(), "File.Copy");
}

#[test]
fn empty_parameter_map_reports_from_required() {
    for f in [&Move as &dyn BridgeFunction, &Copy] {
        let result = f.execute(&Params::new());
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("'from' parameter is required"));
    }
}

#[test]
fn missing_to_reports_to_required() {
    for f in [&Move as &dyn BridgeFunction, &Copy] {
        let result = f.execute(&params(Some("/somewhere/in.txt"), None));
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("'to' parameter is required"));
    }
}

#[test]
fn non_string_parameter_reads_as_missing() {
    let mut map = Params::new();
    map.insert("from".into(), json!(42));
    map.insert("to".into(), json!("/tmp/out.txt"));

    let result = Copy.execute(&map);

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("'from' parameter is required"));
}

#[test]
fn success_result_map_has_no_error_key() {
    let td = tempfile::tempdir().unwrap();
    let src = td.path().join("in.txt");
    let dst = td.path().join("out.txt");
    fs::write(&src, b"payload").unwrap();

    let result = Copy.execute(&params(src.to_str(), dst.to_str()));
    assert!(result.success);

    let value = serde_json::to_value(&result).unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.get("success"), Some(&Value::Bool(true)));
    assert!(!map.contains_key("error"));
}

#[test]
fn failure_result_map_carries_error_key() {
    let td = tempfile::tempdir().unwrap();
    let missing = td.path().join("absent.txt");
    let dst = td.path().join("out.txt");

    let result = Move.execute(&params(missing.to_str(), dst.to_str()));
    assert!(!result.success);

    let value = serde_json::to_value(&result).unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.get("success"), Some(&Value::Bool(false)));
    assert_eq!(
        map.get("error"),
        Some(&Value::String("Source file does not exist".into()))
    );
}

#[test]
fn move_and_copy_agree_on_validation() {
    // Identical precondition policy across both functions (shared contract).
    let td = tempfile::tempdir().unwrap();
    let dir = td.path().join("folder");
    fs::create_dir(&dir).unwrap();
    let map = params(dir.to_str(), td.path().join("out").to_str());

    let move_result = Move.execute(&map);
    let copy_result = Copy.execute(&map);

    assert_eq!(move_result.error.as_deref(), Some("Source is not a file"));
    assert_eq!(copy_result.error, move_result.error);
}
