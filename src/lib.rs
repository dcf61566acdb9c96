//! Closed, declaration-ordered enumerations.
//!
//! `ordenum` re-exports the workspace crates behind one facade:
//! - `ordenum-common`: errors, dynamic values, value contracts, output mode
//! - `ordenum-core`: the enum registry, `declare_enum!`, `EnumSet`, `EnumMap`
//!
//! ```
//! use ordenum::{EnumSet, Enumeration, declare_enum};
//!
//! declare_enum! {
//!     pub enum Weekday {
//!         MONDAY,
//!         TUESDAY,
//!         WEDNESDAY,
//!         THURSDAY,
//!         FRIDAY,
//!     }
//! }
//!
//! let set = EnumSet::from_bitmask(Weekday::enum_type(), 0b10001).unwrap();
//! assert_eq!(set.names(), ["MONDAY", "FRIDAY"]);
//! assert_eq!(set.to_bitmask().unwrap(), 0b10001);
//! ```

// Shared types
pub use ordenum_common::{
    EnumConfig, EnumError, EnumValue, Fields, OutputMode, Record, Result, Value, ValueKind,
    ValueType, camel_name, label, limits, lower_name, output_mode, set_output_mode,
};

// Enum machinery
pub use ordenum_core::{
    Constant, Declaration, DeclarationSource, EnumInstance, EnumMap, EnumSet, EnumType,
    Enumeration, Member, PayloadConstructor, Visibility, catalog, declare_enum, default_payload,
};

// Tracing configuration
pub mod tracing_config;
