//! Common types and utilities for ordenum.
//!
//! This crate provides foundational types used across all ordenum crates:
//! - The shared error type (`EnumError`, `Result`)
//! - Dynamic payload values and value contracts (`Value`, `ValueKind`, `ValueType`)
//! - Process-wide output configuration (`OutputMode`, `EnumConfig`)
//! - Constant-name formatting helpers (`lower_name`, `camel_name`, `label`)
//! - Centralized limits

// Error type shared by the registry, sets and maps
pub mod diagnostics;
pub use diagnostics::{EnumError, Result};

// Dynamic payload values and EnumMap value contracts
pub mod value;
pub use value::{EnumValue, Fields, Record, Value, ValueKind, ValueType};

// Output representation selection
pub mod output;
pub use output::{EnumConfig, OutputMode, output_mode, set_output_mode};

// Constant name formatting
pub mod names;
pub use names::{camel_name, label, lower_name};

// Centralized limits
pub mod limits;
