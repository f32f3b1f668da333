//! Harness orchestration.
//! Merges config and flags, initializes logging, dispatches the requested
//! bridge function by name, and prints the result map as JSON.

use std::process::ExitCode;

use anyhow::{Result, bail};
use serde_json::Value;
use tracing::debug;

use file_bridge::bridge::{self, BridgeFunction};
use file_bridge::{Params, config, output as out};

use crate::cli::Args;
use crate::logging::init_tracing;

/// Run the harness. The returned exit code mirrors the result map; the
/// bridge contract itself never fails through any channel other than that
/// map.
pub fn run(args: Args) -> Result<ExitCode> {
    let functions: [&dyn BridgeFunction; 2] = [&bridge::Move, &bridge::Copy];

    if args.list {
        for f in functions {
            out::print_result(f.name());
        }
        return Ok(ExitCode::SUCCESS);
    }

    // Config file first, flags win.
    let mut cfg = config::load()?;
    if let Some(lvl) = args.log_level {
        cfg.log_level = lvl;
    }
    if let Some(file) = args.log_file.clone() {
        cfg.log_file = Some(file);
    }

    // Guard must outlive the call so the file appender flushes before exit.
    let _guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json_logs)?;

    let name = args.function.as_deref().unwrap_or_default();
    let Some(function) = functions.iter().find(|f| f.name() == name) else {
        let known: Vec<&str> = functions.iter().map(|f| f.name()).collect();
        bail!(
            "unknown bridge function '{name}'; known functions: {}",
            known.join(", ")
        );
    };

    let mut params = Params::new();
    if let Some(from) = &args.from {
        params.insert("from".into(), Value::String(from.clone()));
    }
    if let Some(to) = &args.to {
        params.insert("to".into(), Value::String(to.clone()));
    }
    debug!(function = function.name(), "dispatching");

    let result = function.execute(&params);
    out::print_result(&serde_json::to_string(&result)?);

    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
