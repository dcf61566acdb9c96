//! Process-wide catalog of enum types, keyed by type id.
//!
//! A type joins the catalog when its declaration is first discovered. Ids must
//! be unique: two registries under one id would mint two singletons for the
//! same `(type, name)` pair. Short names may repeat across modules.

use crate::registry::EnumType;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use once_cell::sync::Lazy;
use ordenum_common::{EnumError, Result};
use tracing::{debug, trace};

static CATALOG: Lazy<DashMap<&'static str, &'static EnumType>> = Lazy::new(DashMap::new);

/// Registers `enum_type` under its id. Re-registering the same registry is a no-op.
pub(crate) fn register(enum_type: &'static EnumType) -> Result<()> {
    match CATALOG.entry(enum_type.id()) {
        Entry::Occupied(existing) if *existing.get() == enum_type => Ok(()),
        Entry::Occupied(_) => {
            debug!(type_id = enum_type.id(), "rejecting duplicate enum type registration");
            Err(EnumError::IdentityViolation {
                enum_name: enum_type.id().to_string(),
            })
        }
        Entry::Vacant(slot) => {
            trace!(type_id = enum_type.id(), "catalog insert");
            slot.insert(enum_type);
            Ok(())
        }
    }
}

/// The registered type with id `id`.
///
/// Types appear here only after their first use.
pub fn lookup(id: &str) -> Option<&'static EnumType> {
    CATALOG.get(id).map(|entry| *entry.value())
}

/// Ids of all registered types, sorted.
pub fn registered_ids() -> Vec<&'static str> {
    let mut ids: Vec<_> = CATALOG.iter().map(|entry| *entry.key()).collect();
    ids.sort_unstable();
    ids
}

/// Registered types whose short name is `name`, sorted by id.
pub fn lookup_by_name(name: &str) -> Vec<&'static EnumType> {
    let mut found: Vec<_> = CATALOG
        .iter()
        .map(|entry| *entry.value())
        .filter(|enum_type| enum_type.name() == name)
        .collect();
    found.sort_unstable_by_key(|enum_type| enum_type.id());
    found
}

#[cfg(test)]
#[path = "../tests/catalog_tests.rs"]
mod tests;
