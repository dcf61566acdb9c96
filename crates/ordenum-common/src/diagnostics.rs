//! Error type for enum declaration, lookup, set and map operations.
//!
//! Every error is a programming-contract violation raised synchronously at the
//! point of violation. Nothing here is transient, so nothing is retried.
//! Callers that expect absence use the `try_*` lookups, which return `Option`
//! instead of `UnknownConstant` / `UnknownValue`.

/// Result alias used throughout ordenum.
pub type Result<T> = std::result::Result<T, EnumError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumError {
    /// The requested name is not declared by the enum type.
    #[error("unknown constant `{name}` for enum `{enum_name}`")]
    UnknownConstant { enum_name: String, name: String },

    /// No constant of the enum type carries the requested payload.
    #[error("no constant of enum `{enum_name}` has value {value}")]
    UnknownValue { enum_name: String, value: String },

    /// An instance or set of one enum type was used where another was required.
    #[error("type mismatch: expected `{expected}`, found `{found}`")]
    TypeMismatch { expected: String, found: String },

    /// An `EnumMap` key (or key type) is not of the map's declared key type.
    #[error("invalid key type: expected `{expected}`, found `{found}`")]
    InvalidKeyType { expected: String, found: String },

    /// An `EnumMap` value violates the map's declared value contract.
    #[error("invalid value type: expected `{expected}`, found `{found}`")]
    InvalidValueType { expected: String, found: String },

    /// A map's `(key type, value kind, nullable)` contract differs from an asserted one.
    #[error("map contract mismatch: expected {expected}, actual {actual}")]
    Expectation { expected: String, actual: String },

    /// A second registry tried to claim an enum type name that is already owned.
    #[error("identity violation: enum `{enum_name}` is already registered by another declaration")]
    IdentityViolation { enum_name: String },

    /// The enum type's declaration is malformed.
    #[error("invalid declaration for enum `{enum_name}`: {reason}")]
    Declaration { enum_name: String, reason: String },

    /// The enum domain does not fit into the integer bitmask.
    #[error("enum `{enum_name}` has {size} constants; bitmasks hold at most {max}")]
    DomainTooLarge {
        enum_name: String,
        size: usize,
        max: u32,
    },

    /// A bitmask has bits set at or above the domain size.
    #[error("bitmask {mask:#b} has bits outside the {size} constants of enum `{enum_name}`")]
    InvalidBitmask {
        enum_name: String,
        mask: u64,
        size: usize,
    },

    /// A payload constructor rejected its arguments.
    #[error("cannot construct `{enum_name}::{name}`: {reason}")]
    Construction {
        enum_name: String,
        name: String,
        reason: String,
    },
}

impl EnumError {
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn declaration(enum_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Declaration {
            enum_name: enum_name.into(),
            reason: reason.into(),
        }
    }

    /// Whether this reports a lookup that found nothing, as opposed to a
    /// contract violation. The `try_*` lookups return `Ok(None)` in exactly
    /// these cases.
    pub fn is_absence(&self) -> bool {
        matches!(self, Self::UnknownConstant { .. } | Self::UnknownValue { .. })
    }
}
