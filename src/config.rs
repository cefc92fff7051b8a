//! Configuration for the adapter layer

use serde::Deserialize;
use std::env;

/// Level at which absorbed failures are logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureLevel {
    Off,
    Debug,
    Warn,
}

impl FailureLevel {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Some(FailureLevel::Off),
            "debug" => Some(FailureLevel::Debug),
            "warn" | "warning" => Some(FailureLevel::Warn),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuardConfig {
    /// Capture panics raised by protected calls as failures
    pub catch_panics: bool,
    /// Tracing level for absorbed failures
    pub failure_level: FailureLevel,
}

impl Default for GuardConfig {
    fn default() -> Self {
        GuardConfig {
            catch_panics: true,
            failure_level: FailureLevel::Debug,
        }
    }
}

impl GuardConfig {
    /// Load from `MUPDF_GUARD_*` environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = GuardConfig::default();
        GuardConfig {
            catch_panics: env::var("MUPDF_GUARD_CATCH_PANICS")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.catch_panics),
            failure_level: env::var("MUPDF_GUARD_FAILURE_LEVEL")
                .ok()
                .and_then(|v| FailureLevel::parse(&v))
                .unwrap_or(defaults.failure_level),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
