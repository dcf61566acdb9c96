//! Dynamic payload values and value contracts.
//!
//! Enum payloads and `EnumMap` values are heterogeneous, so they are carried as
//! a small dynamic [`Value`]. Equality on `Value` is exact: `Int(1)` and
//! `Float(1.0)` are different values, and `"1"` never equals `1`.
//!
//! A [`ValueType`] is the `(kind, nullable)` contract an `EnumMap` enforces on
//! every value it stores.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::diagnostics::{EnumError, Result};

// =============================================================================
// Value
// =============================================================================

/// Ordered fields of an object or record.
pub type Fields = IndexMap<String, Value>;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    /// Anonymous keyed object.
    Object(Fields),
    /// Object of a named class.
    Record(Record),
    /// Reference to an enum singleton.
    Enum(EnumValue),
}

/// An object of a named class: the class name plus its fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub class: String,
    pub fields: Fields,
}

impl Record {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// A by-value reference to an enum singleton.
///
/// `type_id` is the module-qualified id of the enum type and is unique
/// process-wide; `enum_name` is the short name used for display. Two enum
/// types may share a short name, so equality and class checks go through
/// `type_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    pub type_id: &'static str,
    pub enum_name: &'static str,
    pub name: &'static str,
    pub ordinal: usize,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short description of the runtime kind, used in error messages.
    pub fn kind_name(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Int(_) => "int".to_string(),
            Value::Float(_) => "float".to_string(),
            Value::String(_) => "string".to_string(),
            Value::Array(_) => "array".to_string(),
            Value::Object(_) => "object".to_string(),
            Value::Record(record) => record.class.clone(),
            Value::Enum(e) => e.type_id.to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Converts to JSON. Records lose their class name; enum references become
    /// their constant name.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(fields) | Value::Record(Record { fields, .. }) => serde_json::Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Value::Enum(e) => serde_json::Value::String(e.name.to_string()),
        }
    }

    /// Converts from JSON. Integral numbers become `Int`, others `Float`.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Array(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Enum(e) => write!(f, "{}::{}", e.enum_name, e.name),
            Value::Record(record) => write!(f, "{}{}", record.class, self.to_json()),
            _ => write!(f, "{}", self.to_json()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(fields) | Value::Record(Record { fields, .. }) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (k, v) in fields {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Enum(e) => serializer.serialize_str(e.name),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions
// -----------------------------------------------------------------------------

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl From<EnumValue> for Value {
    fn from(e: EnumValue) -> Self {
        Value::Enum(e)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// Value contracts
// =============================================================================

/// The kind half of an `EnumMap` value contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    String,
    Object,
    Array,
    /// Instance-of check against a record class name or the id of an enum
    /// type (see `EnumType::id`).
    Class(String),
    /// Accepts anything, null included.
    Mixed,
}

impl ValueKind {
    /// Whether a non-null value matches this kind.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (ValueKind::Mixed, _) => true,
            (ValueKind::Bool, Value::Bool(_))
            | (ValueKind::Int, Value::Int(_))
            | (ValueKind::Float, Value::Float(_))
            | (ValueKind::String, Value::String(_))
            | (ValueKind::Array, Value::Array(_)) => true,
            (ValueKind::Object, Value::Object(_) | Value::Record(_) | Value::Enum(_)) => true,
            (ValueKind::Class(class), Value::Record(record)) => record.class == *class,
            (ValueKind::Class(class), Value::Enum(e)) => e.type_id == class,
            _ => false,
        }
    }
}

impl FromStr for ValueKind {
    type Err = EnumError;

    /// Parses a kind keyword. Anything that is not a keyword is taken as a class name.
    fn from_str(s: &str) -> Result<Self> {
        let kind = match s {
            "bool" | "boolean" => ValueKind::Bool,
            "int" | "integer" => ValueKind::Int,
            "float" | "double" => ValueKind::Float,
            "string" => ValueKind::String,
            "object" => ValueKind::Object,
            "array" => ValueKind::Array,
            "mixed" => ValueKind::Mixed,
            "" => {
                return Err(EnumError::InvalidValueType {
                    expected: "a value kind".to_string(),
                    found: "empty string".to_string(),
                });
            }
            class => ValueKind::Class(class.to_string()),
        };
        Ok(kind)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => f.write_str("bool"),
            ValueKind::Int => f.write_str("int"),
            ValueKind::Float => f.write_str("float"),
            ValueKind::String => f.write_str("string"),
            ValueKind::Object => f.write_str("object"),
            ValueKind::Array => f.write_str("array"),
            ValueKind::Class(class) => f.write_str(class),
            ValueKind::Mixed => f.write_str("mixed"),
        }
    }
}

impl<'de> Deserialize<'de> for ValueKind {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A value contract: kind plus nullability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ValueType {
    pub kind: ValueKind,
    #[serde(default)]
    pub nullable: bool,
}

impl ValueType {
    pub fn new(kind: ValueKind, nullable: bool) -> Self {
        Self { kind, nullable }
    }

    pub fn accepts(&self, value: &Value) -> bool {
        if value.is_null() {
            return self.nullable || self.kind == ValueKind::Mixed;
        }
        self.kind.matches(value)
    }

    /// Fails with `InvalidValueType` when `value` violates this contract.
    pub fn check(&self, value: &Value) -> Result<()> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(EnumError::InvalidValueType {
                expected: self.to_string(),
                found: value.kind_name(),
            })
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable && self.kind != ValueKind::Mixed {
            f.write_str("?")?;
        }
        write!(f, "{}", self.kind)
    }
}

#[cfg(test)]
#[path = "../tests/value_tests.rs"]
mod tests;
