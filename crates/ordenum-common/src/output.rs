//! Output representation of enum instances.
//!
//! An instance can be rendered as its bare name, its payload, or a structured
//! `{name, value, label, ordinal}` record. The mode used by `Serialize` is a
//! process-wide setting:
//!
//! - initialised from `ORDENUM_OUTPUT_MODE` (`name`, `value` or `object`) on
//!   first use, defaulting to `object`
//! - overridden at runtime with [`set_output_mode`] or [`EnumConfig::apply`]
//!
//! ```
//! use ordenum_common::{EnumConfig, OutputMode, output_mode};
//!
//! let config = EnumConfig::from_json(r#"{ "outputMode": "name" }"#).unwrap();
//! config.apply();
//! assert_eq!(output_mode(), OutputMode::Name);
//! ```

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::debug;

/// Environment variable read once to seed the process-wide output mode.
pub const OUTPUT_MODE_ENV: &str = "ORDENUM_OUTPUT_MODE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Bare symbolic name.
    Name,
    /// The constructed payload.
    Value,
    /// `{name, value, label, ordinal}`.
    #[default]
    Object,
}

impl OutputMode {
    const fn to_u8(self) -> u8 {
        match self {
            OutputMode::Name => 0,
            OutputMode::Value => 1,
            OutputMode::Object => 2,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => OutputMode::Name,
            1 => OutputMode::Value,
            _ => OutputMode::Object,
        }
    }

    /// Parses a mode name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Some(OutputMode::Name),
            "value" => Some(OutputMode::Value),
            "object" => Some(OutputMode::Object),
            _ => None,
        }
    }

    /// Reads `ORDENUM_OUTPUT_MODE`, falling back to the default for unset or
    /// unrecognised values.
    pub fn from_env() -> Self {
        match std::env::var(OUTPUT_MODE_ENV) {
            Ok(raw) => Self::parse(&raw).unwrap_or_else(|| {
                debug!(value = %raw, "ignoring unrecognised {OUTPUT_MODE_ENV}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}

static OUTPUT_MODE: Lazy<AtomicU8> = Lazy::new(|| AtomicU8::new(OutputMode::from_env().to_u8()));

/// Current process-wide output mode.
pub fn output_mode() -> OutputMode {
    OutputMode::from_u8(OUTPUT_MODE.load(Ordering::Relaxed))
}

/// Replaces the process-wide output mode, returning the previous one.
pub fn set_output_mode(mode: OutputMode) -> OutputMode {
    let previous = OutputMode::from_u8(OUTPUT_MODE.swap(mode.to_u8(), Ordering::Relaxed));
    debug!(?previous, current = ?mode, "output mode changed");
    previous
}

/// Library configuration, loadable from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnumConfig {
    #[serde(default)]
    pub output_mode: Option<OutputMode>,
}

impl EnumConfig {
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    /// Installs every setting present in this config.
    pub fn apply(&self) {
        if let Some(mode) = self.output_mode {
            set_output_mode(mode);
        }
    }
}

#[cfg(test)]
#[path = "../tests/output_tests.rs"]
mod tests;
