//! Closed, declaration-ordered enumerations.
//!
//! This crate provides the enum machinery built on `ordenum-common`:
//! - Declarations and constant discovery (`Declaration`, `Member`, `Visibility`)
//! - Per-type singleton registries (`EnumType`) and instances (`EnumInstance`)
//! - Declaring types (`declare_enum!`, `Enumeration`)
//! - Ordinal-ordered sets with bitmask codec (`EnumSet`)
//! - Type-checked maps keyed by constants (`EnumMap`)
//! - The process-wide type catalog (`catalog`)

// Constant tables and visibility filtering
pub mod declaration;
pub use declaration::{Constant, Declaration, DeclarationSource, Member, Visibility};

// Per-type singleton registry
pub mod registry;
pub use registry::{EnumType, PayloadConstructor, default_payload};

// Singleton values
pub mod instance;
pub use instance::EnumInstance;

// Type name -> registry
pub mod catalog;

// declare_enum! and the Enumeration trait
pub mod enumeration;
pub use enumeration::Enumeration;

pub mod enum_set;
pub use enum_set::EnumSet;

pub mod enum_map;
pub use enum_map::EnumMap;

pub use ordenum_common::{
    EnumError, OutputMode, Record, Result, Value, ValueKind, ValueType, output_mode,
    set_output_mode,
};

#[cfg(test)]
pub(crate) mod test_fixtures;
