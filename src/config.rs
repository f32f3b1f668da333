//! Harness configuration.
//! Settings load from an XML file; CLI flags override file values. The
//! bridge core itself takes no configuration.
//!
//! Search order for the file: $FILE_BRIDGE_CONFIG if set, else the platform
//! config directory (e.g. ~/.config/file_bridge/config.xml on Linux). A
//! missing file means defaults; a file that exists but does not parse is an
//! error so misconfiguration is not silent.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming an explicit config file path.
pub const CONFIG_ENV: &str = "FILE_BRIDGE_CONFIG";

/// Console verbosity exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More detail
    Verbose,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "info" => Some(LogLevel::Normal),
            "verbose" | "detailed" => Some(LogLevel::Verbose),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Verbose => "verbose",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Harness settings with defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgeConfig {
    pub log_level: LogLevel,
    pub log_file: Option<PathBuf>,
}

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
}

/// Default config file path under the platform config directory.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("no config directory for this platform")?;
    Ok(base.join("file_bridge").join("config.xml"))
}

/// Load settings from $FILE_BRIDGE_CONFIG or the default path.
pub fn load() -> Result<BridgeConfig> {
    let path = match env::var_os(CONFIG_ENV) {
        Some(p) => PathBuf::from(p),
        None => default_config_path()?,
    };
    if !path.exists() {
        return Ok(BridgeConfig::default());
    }
    load_from_path(&path)
}

/// Load settings from an explicit file path.
pub fn load_from_path(path: &Path) -> Result<BridgeConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&content)
        .with_context(|| format!("parse config file {}", path.display()))?;

    let mut cfg = BridgeConfig::default();
    if let Some(lvl) = parsed.log_level.as_deref().map(str::trim)
        && !lvl.is_empty()
    {
        cfg.log_level = LogLevel::parse(lvl)
            .with_context(|| format!("invalid log_level '{lvl}' in {}", path.display()))?;
    }
    if let Some(file) = parsed.log_file.as_deref().map(str::trim)
        && !file.is_empty()
    {
        cfg.log_file = Some(PathBuf::from(file));
    }
    Ok(cfg)
}
