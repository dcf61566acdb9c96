//! Enum singletons.
//!
//! An [`EnumInstance`] is only ever created by its type's [`EnumType`]
//! registry and only ever handed out as `&'static EnumInstance`. It has no
//! public constructor and implements neither `Clone` nor `Deserialize`, so a
//! second object claiming an existing `(type, name)` cannot be made:
//!
//! ```compile_fail
//! fn assert_clone<T: Clone>() {}
//! assert_clone::<ordenum_core::EnumInstance>();
//! ```
//!
//! ```compile_fail
//! fn assert_deserialize<T: serde::de::DeserializeOwned>() {}
//! assert_deserialize::<ordenum_core::EnumInstance>();
//! ```
//!
//! Equality and hashing are by identity. Ordering is only defined between
//! instances of the same type.

use crate::registry::EnumType;
use ordenum_common::value::{EnumValue, Fields};
use ordenum_common::{EnumError, OutputMode, Result, Value, names, output_mode};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

pub struct EnumInstance {
    enum_type: &'static EnumType,
    name: &'static str,
    ordinal: usize,
    payload: Value,
}

impl EnumInstance {
    pub(crate) fn new(
        enum_type: &'static EnumType,
        name: &'static str,
        ordinal: usize,
        payload: Value,
    ) -> Self {
        Self {
            enum_type,
            name,
            ordinal,
            payload,
        }
    }

    pub fn enum_type(&self) -> &'static EnumType {
        self.enum_type
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Zero-based declaration position.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The constructed payload.
    pub fn value(&self) -> &Value {
        &self.payload
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Identity comparison.
    pub fn equals(&self, other: &EnumInstance) -> bool {
        std::ptr::eq(self, other)
    }

    pub fn is_same_type(&self, other: &EnumInstance) -> bool {
        self.enum_type == other.enum_type
    }

    fn check_same_type(&self, other: &EnumInstance) -> Result<()> {
        if self.is_same_type(other) {
            Ok(())
        } else {
            Err(EnumError::type_mismatch(
                self.enum_type.name(),
                other.enum_type.name(),
            ))
        }
    }

    /// `ordinal(self) - ordinal(other)`.
    ///
    /// Fails with `TypeMismatch` for instances of different enum types.
    pub fn compare_to(&self, other: &EnumInstance) -> Result<isize> {
        self.check_same_type(other)?;
        Ok(self.ordinal as isize - other.ordinal as isize)
    }

    pub fn is_before(&self, other: &EnumInstance) -> Result<bool> {
        Ok(self.compare_to(other)? < 0)
    }

    pub fn is_after(&self, other: &EnumInstance) -> Result<bool> {
        Ok(self.compare_to(other)? > 0)
    }

    /// The constant with the next ordinal, `None` after the last one.
    pub fn next(&self) -> Result<Option<&'static EnumInstance>> {
        self.enum_type.by_ordinal(self.ordinal + 1)
    }

    /// The constant with the previous ordinal, `None` before the first one.
    pub fn previous(&self) -> Result<Option<&'static EnumInstance>> {
        match self.ordinal.checked_sub(1) {
            Some(ordinal) => self.enum_type.by_ordinal(ordinal),
            None => Ok(None),
        }
    }

    pub fn is_any_of(&self, candidates: &[&EnumInstance]) -> bool {
        candidates.iter().any(|c| self.equals(c))
    }

    pub fn is_none_of(&self, candidates: &[&EnumInstance]) -> bool {
        !self.is_any_of(candidates)
    }

    pub fn lower_name(&self) -> String {
        names::lower_name(self.name)
    }

    pub fn camel_name(&self) -> String {
        names::camel_name(self.name)
    }

    pub fn label(&self) -> String {
        names::label(self.name)
    }

    /// A by-value reference suitable for storing in a [`Value`].
    pub fn as_enum_value(&self) -> EnumValue {
        EnumValue {
            type_id: self.enum_type.id(),
            enum_name: self.enum_type.name(),
            name: self.name,
            ordinal: self.ordinal,
        }
    }

    /// The external representation selected by `mode`.
    pub fn to_output(&self, mode: OutputMode) -> Value {
        match mode {
            OutputMode::Name => Value::from(self.name),
            OutputMode::Value => self.payload.clone(),
            OutputMode::Object => {
                let mut fields = Fields::with_capacity(4);
                fields.insert("name".to_string(), Value::from(self.name));
                fields.insert("value".to_string(), self.payload.clone());
                fields.insert("label".to_string(), Value::from(self.label()));
                fields.insert("ordinal".to_string(), Value::Int(self.ordinal as i64));
                Value::Object(fields)
            }
        }
    }
}

impl From<&EnumInstance> for Value {
    fn from(instance: &EnumInstance) -> Self {
        Value::Enum(instance.as_enum_value())
    }
}

impl PartialEq for EnumInstance {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for EnumInstance {}

impl Hash for EnumInstance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self, state);
    }
}

impl PartialOrd for EnumInstance {
    /// `None` across enum types.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.is_same_type(other)
            .then(|| self.ordinal.cmp(&other.ordinal))
    }
}

impl fmt::Debug for EnumInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.enum_type.name(), self.name)
    }
}

impl fmt::Display for EnumInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for EnumInstance {
    /// Serializes in the process-wide [`OutputMode`].
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_output(output_mode()).serialize(serializer)
    }
}

#[cfg(test)]
#[path = "../tests/instance_tests.rs"]
mod tests;
