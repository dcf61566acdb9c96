//! Type-checked maps keyed by enum constants.
//!
//! An [`EnumMap`] is created with a key type and a value contract
//! ([`ValueType`]). Every `put` checks both; stored entries are kept in
//! ordinal order.
//!
//! `get` distinguishes a missing key (`None`) from a stored null
//! (`Some(&Value::Null)`).

use crate::instance::EnumInstance;
use crate::registry::EnumType;
use ordenum_common::{EnumError, Result, Value, ValueKind, ValueType};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Clone)]
pub struct EnumMap {
    key_type: &'static EnumType,
    domain: &'static [&'static EnumInstance],
    value_type: ValueType,
    slots: Vec<Option<Value>>,
    len: usize,
}

impl EnumMap {
    /// An empty map.
    ///
    /// Fails with `InvalidKeyType` when `key_type` has an invalid declaration.
    pub fn new(key_type: &'static EnumType, kind: ValueKind, nullable: bool) -> Result<Self> {
        Self::with_value_type(key_type, ValueType::new(kind, nullable))
    }

    pub fn with_value_type(key_type: &'static EnumType, value_type: ValueType) -> Result<Self> {
        let domain = key_type
            .all_instances()
            .map_err(|err| EnumError::InvalidKeyType {
                expected: "an enum type".to_string(),
                found: format!("{} ({err})", key_type.name()),
            })?;
        Ok(Self {
            key_type,
            domain,
            value_type,
            slots: vec![None; domain.len()],
            len: 0,
        })
    }

    pub fn from_entries<'a>(
        key_type: &'static EnumType,
        kind: ValueKind,
        nullable: bool,
        entries: impl IntoIterator<Item = (&'a EnumInstance, Value)>,
    ) -> Result<Self> {
        let mut map = Self::new(key_type, kind, nullable)?;
        for (key, value) in entries {
            map.put(key, value)?;
        }
        Ok(map)
    }

    pub fn key_type(&self) -> &'static EnumType {
        self.key_type
    }

    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    /// Asserts this map's contract is exactly `(key_type, kind, nullable)`.
    pub fn expect(&self, key_type: &'static EnumType, kind: ValueKind, nullable: bool) -> Result<()> {
        let expected = ValueType::new(kind, nullable);
        if self.key_type == key_type && self.value_type == expected {
            return Ok(());
        }
        Err(EnumError::Expectation {
            expected: format!("<{}, {}>", key_type.id(), describe(&expected)),
            actual: format!("<{}, {}>", self.key_type.id(), describe(&self.value_type)),
        })
    }

    fn check_key(&self, key: &EnumInstance) -> Result<usize> {
        if key.enum_type() == self.key_type {
            Ok(key.ordinal())
        } else {
            Err(EnumError::InvalidKeyType {
                expected: self.key_type.name().to_string(),
                found: key.enum_type().name().to_string(),
            })
        }
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn put(&mut self, key: &EnumInstance, value: impl Into<Value>) -> Result<()> {
        let ordinal = self.check_key(key)?;
        let value = value.into();
        self.value_type.check(&value)?;
        if self.slots[ordinal].replace(value).is_none() {
            self.len += 1;
        }
        Ok(())
    }

    pub fn get(&self, key: &EnumInstance) -> Result<Option<&Value>> {
        let ordinal = self.check_key(key)?;
        Ok(self.slots[ordinal].as_ref())
    }

    /// The stored value, or `default` when `key` is absent.
    pub fn get_or<'a>(&'a self, key: &EnumInstance, default: &'a Value) -> Result<&'a Value> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Removes and returns the value under `key`.
    pub fn remove(&mut self, key: &EnumInstance) -> Result<Option<Value>> {
        let ordinal = self.check_key(key)?;
        let removed = self.slots[ordinal].take();
        if removed.is_some() {
            self.len -= 1;
        }
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    pub fn contains_key(&self, key: &EnumInstance) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Exact-equality scan over the stored values.
    pub fn contains_value(&self, value: &Value) -> bool {
        self.values().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `(key, value)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static EnumInstance, &Value)> + '_ {
        let domain = self.domain;
        self.slots
            .iter()
            .enumerate()
            .filter_map(move |(ordinal, slot)| slot.as_ref().map(|value| (domain[ordinal], value)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static EnumInstance> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.iter().map(|(_, value)| value)
    }

    pub fn entries(&self) -> Vec<(&'static EnumInstance, &Value)> {
        self.iter().collect()
    }

    // -------------------------------------------------------------------------
    // Functional views
    // -------------------------------------------------------------------------

    /// A map with the same contract holding the entries matching `predicate`.
    pub fn filter(&self, mut predicate: impl FnMut(&'static EnumInstance, &Value) -> bool) -> EnumMap {
        let mut result = self.clone();
        for (ordinal, slot) in result.slots.iter_mut().enumerate() {
            if slot.as_ref().is_some_and(|value| !predicate(self.domain[ordinal], value)) {
                *slot = None;
                result.len -= 1;
            }
        }
        result
    }

    /// A map with the same keys and contract; every mapped value is checked
    /// against the contract.
    pub fn map_values(
        &self,
        mut f: impl FnMut(&'static EnumInstance, &Value) -> Value,
    ) -> Result<EnumMap> {
        let mut result = Self::with_value_type(self.key_type, self.value_type.clone())?;
        for (key, value) in self.iter() {
            result.put(key, f(key, value))?;
        }
        Ok(result)
    }

    pub fn map_keys<T>(&self, f: impl FnMut(&'static EnumInstance) -> T) -> Vec<T> {
        self.keys().map(f).collect()
    }

    pub fn any(&self, mut predicate: impl FnMut(&'static EnumInstance, &Value) -> bool) -> bool {
        self.iter().any(|(key, value)| predicate(key, value))
    }

    /// `true` for an empty map.
    pub fn all(&self, mut predicate: impl FnMut(&'static EnumInstance, &Value) -> bool) -> bool {
        self.iter().all(|(key, value)| predicate(key, value))
    }

    /// The entry with the lowest key ordinal.
    pub fn first(&self) -> Option<(&'static EnumInstance, &Value)> {
        self.iter().next()
    }

    /// The entry with the highest key ordinal.
    pub fn last(&self) -> Option<(&'static EnumInstance, &Value)> {
        self.slots
            .iter()
            .enumerate()
            .rev()
            .find_map(|(ordinal, slot)| slot.as_ref().map(|value| (self.domain[ordinal], value)))
    }
}

fn describe(value_type: &ValueType) -> String {
    format!("{}, nullable={}", value_type.kind, value_type.nullable)
}

impl PartialEq for EnumMap {
    /// Same key type, same size, same `(key, value)` pairs in ordinal order.
    fn eq(&self, other: &Self) -> bool {
        self.key_type == other.key_type && self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<'a> IntoIterator for &'a EnumMap {
    type Item = (&'static EnumInstance, &'a Value);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl fmt::Debug for EnumMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumMap<{}, {}>", self.key_type.name(), self.value_type)?;
        f.debug_map()
            .entries(self.iter().map(|(key, value)| (key.name(), value)))
            .finish()
    }
}

impl Serialize for EnumMap {
    /// Serializes as an object keyed by constant name.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.name(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "../tests/enum_map_tests.rs"]
mod tests;
