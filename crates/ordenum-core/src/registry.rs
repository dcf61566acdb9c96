//! Per-type enum registry.
//!
//! Each concrete enum type owns exactly one [`EnumType`], normally a `static`
//! generated by [`declare_enum!`](crate::declare_enum). The registry:
//!
//! - discovers the type's [`Declaration`] once, on first use
//! - materialises each singleton lazily, the first time its name (or ordinal)
//!   is requested, so touching one constant never constructs the others
//! - materialises the whole domain once when "all instances" are needed, and
//!   caches that ordinal-ordered slice for the life of the process
//!
//! All caches are `OnceCell`s: the first access wins and concurrent callers
//! observe the same singleton.
//!
//! ## Payload construction
//!
//! The raw payload of a constant is turned into constructor arguments:
//!
//! | Raw payload | Arguments |
//! |-------------|-----------|
//! | `Array([a, b, ..])` | `a, b, ..` (spread) |
//! | `Null` | none |
//! | anything else | the value itself |
//!
//! The type's [`PayloadConstructor`] turns those arguments into the payload.

use crate::catalog;
use crate::declaration::{Declaration, DeclarationSource};
use crate::instance::EnumInstance;
use once_cell::sync::OnceCell;
use ordenum_common::{EnumError, Result, Value};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use tracing::{debug, trace};

/// Builds a payload from spread constructor arguments.
pub type PayloadConstructor = fn(Vec<Value>) -> std::result::Result<Value, String>;

/// The default constructor: no arguments give `Null`, one argument is the
/// payload itself, several arguments are kept as an `Array`.
pub fn default_payload(mut args: Vec<Value>) -> std::result::Result<Value, String> {
    Ok(match args.len() {
        0 => Value::Null,
        1 => args.pop().unwrap_or_default(),
        _ => Value::Array(args),
    })
}

fn spread_arguments(raw: &Value) -> Vec<Value> {
    match raw {
        Value::Array(items) => items.clone(),
        Value::Null => Vec::new(),
        other => vec![other.clone()],
    }
}

// =============================================================================
// EnumType
// =============================================================================

/// Registry of one concrete enum type.
///
/// Methods take `&'static self`: instances borrow from the registry and are
/// handed out as `&'static EnumInstance`.
///
/// A registry has a short `name` for display and an `id` that identifies the
/// type process-wide. Types declared with [`declare_enum!`](crate::declare_enum)
/// get their module path as part of the id, so `billing::Status` and
/// `shipping::Status` are distinct types.
pub struct EnumType {
    id: &'static str,
    name: &'static str,
    source: DeclarationSource,
    constructor: PayloadConstructor,
    declaration: OnceCell<Result<Declaration>>,
    slots: OnceCell<Box<[OnceCell<EnumInstance>]>>,
    all: OnceCell<Box<[&'static EnumInstance]>>,
}

impl EnumType {
    /// A registry whose payloads are built by [`default_payload`]. The id is
    /// the name itself.
    pub const fn new(name: &'static str, source: DeclarationSource) -> Self {
        Self::with_constructor(name, source, default_payload)
    }

    pub const fn with_constructor(
        name: &'static str,
        source: DeclarationSource,
        constructor: PayloadConstructor,
    ) -> Self {
        Self::qualified(name, name, source, constructor)
    }

    /// A registry identified by `id` and displayed as `name`.
    pub const fn qualified(
        id: &'static str,
        name: &'static str,
        source: DeclarationSource,
        constructor: PayloadConstructor,
    ) -> Self {
        Self {
            id,
            name,
            source,
            constructor,
            declaration: OnceCell::new(),
            slots: OnceCell::new(),
            all: OnceCell::new(),
        }
    }

    /// The short type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The process-wide type id, e.g. `my_crate::billing::Status`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// The declared constants, discovered on first call.
    ///
    /// Discovery also registers this type in the [`catalog`]; a second
    /// registry claiming the same id fails with `IdentityViolation`.
    pub fn declared_constants(&'static self) -> Result<&'static Declaration> {
        let discovered = self.declaration.get_or_init(|| {
            let declaration = Declaration::discover(self.name, (self.source)())?;
            catalog::register(self)?;
            debug!(
                enum_name = self.name,
                count = declaration.len(),
                "enum type registered"
            );
            Ok(declaration)
        });
        discovered.as_ref().map_err(Clone::clone)
    }

    /// Whether the declaration is well-formed.
    pub fn is_valid(&'static self) -> bool {
        self.declared_constants().is_ok()
    }

    pub fn len(&'static self) -> Result<usize> {
        Ok(self.declared_constants()?.len())
    }

    pub fn is_empty(&'static self) -> Result<bool> {
        Ok(self.declared_constants()?.is_empty())
    }

    /// Constant names in ordinal order. Does not materialise instances.
    pub fn names(&'static self) -> Result<Vec<&'static str>> {
        Ok(self.declared_constants()?.names().collect())
    }

    pub fn has_name(&'static self, name: &str) -> Result<bool> {
        Ok(self.declared_constants()?.ordinal_of(name).is_some())
    }

    /// Payloads in ordinal order.
    pub fn values(&'static self) -> Result<Vec<&'static Value>> {
        Ok(self.all_instances()?.iter().map(|e| e.value()).collect())
    }

    pub fn has_value(&'static self, value: &Value) -> Result<bool> {
        Ok(self.try_resolve_by_value(value)?.is_some())
    }

    fn slots(&'static self) -> Result<&'static [OnceCell<EnumInstance>]> {
        let declaration = self.declared_constants()?;
        let slots = self.slots.get_or_init(|| {
            (0..declaration.len())
                .map(|_| OnceCell::new())
                .collect::<Vec<_>>()
                .into_boxed_slice()
        });
        Ok(&**slots)
    }

    /// Materialises the constant at `ordinal`, which must be in range.
    fn materialize(
        &'static self,
        declaration: &'static Declaration,
        ordinal: usize,
    ) -> Result<&'static EnumInstance> {
        let (Some(slot), Some(constant)) = (self.slots()?.get(ordinal), declaration.get(ordinal))
        else {
            return Err(EnumError::declaration(
                self.name,
                format!("ordinal {ordinal} is out of range"),
            ));
        };
        slot.get_or_try_init(|| {
            let payload = (self.constructor)(spread_arguments(&constant.raw)).map_err(|reason| {
                EnumError::Construction {
                    enum_name: self.name.to_string(),
                    name: constant.name.clone(),
                    reason,
                }
            })?;
            trace!(
                enum_name = self.name,
                name = %constant.name,
                ordinal,
                "materialized enum constant"
            );
            Ok(EnumInstance::new(self, constant.name.as_str(), ordinal, payload))
        })
    }

    /// The singleton named `name`.
    pub fn resolve_by_name(&'static self, name: &str) -> Result<&'static EnumInstance> {
        self.try_resolve_by_name(name)?
            .ok_or_else(|| EnumError::UnknownConstant {
                enum_name: self.name.to_string(),
                name: name.to_string(),
            })
    }

    /// Like [`resolve_by_name`](Self::resolve_by_name), but an undeclared
    /// name is `Ok(None)`.
    pub fn try_resolve_by_name(&'static self, name: &str) -> Result<Option<&'static EnumInstance>> {
        let declaration = self.declared_constants()?;
        match declaration.ordinal_of(name) {
            Some(ordinal) => self.materialize(declaration, ordinal).map(Some),
            None => Ok(None),
        }
    }

    /// Case-insensitive lookup; the first match in declaration order wins.
    pub fn resolve_by_name_ignore_case(
        &'static self,
        name: &str,
    ) -> Result<Option<&'static EnumInstance>> {
        Ok(self
            .all_instances()?
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(name)))
    }

    /// The singleton at `ordinal`, or `None` past either end of the domain.
    pub fn by_ordinal(&'static self, ordinal: usize) -> Result<Option<&'static EnumInstance>> {
        let declaration = self.declared_constants()?;
        if ordinal >= declaration.len() {
            return Ok(None);
        }
        self.materialize(declaration, ordinal).map(Some)
    }

    /// Every singleton, ordered by ordinal.
    ///
    /// The first call fills any slots left empty by name lookups; later calls
    /// return the cached slice.
    pub fn all_instances(&'static self) -> Result<&'static [&'static EnumInstance]> {
        let all = self.all.get_or_try_init(|| {
            let declaration = self.declared_constants()?;
            let instances = (0..declaration.len())
                .map(|ordinal| self.materialize(declaration, ordinal))
                .collect::<Result<Vec<_>>>()?;
            debug!(
                enum_name = self.name,
                count = instances.len(),
                "materialized all constants"
            );
            Ok::<_, EnumError>(instances.into_boxed_slice())
        })?;
        Ok(&**all)
    }

    /// The first singleton whose payload equals `value` exactly.
    pub fn resolve_by_value(&'static self, value: &Value) -> Result<&'static EnumInstance> {
        self.try_resolve_by_value(value)?
            .ok_or_else(|| EnumError::UnknownValue {
                enum_name: self.name.to_string(),
                value: value.to_string(),
            })
    }

    pub fn try_resolve_by_value(&'static self, value: &Value) -> Result<Option<&'static EnumInstance>> {
        Ok(self
            .all_instances()?
            .iter()
            .copied()
            .find(|e| e.value() == value))
    }

    /// A uniformly chosen singleton; `None` for an empty domain.
    pub fn random_instance(&'static self) -> Result<Option<&'static EnumInstance>> {
        self.random_instance_with(&mut rand::thread_rng())
    }

    pub fn random_instance_with<R: Rng + ?Sized>(
        &'static self,
        rng: &mut R,
    ) -> Result<Option<&'static EnumInstance>> {
        Ok(self.all_instances()?.choose(rng).copied())
    }
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for EnumType {}

impl fmt::Debug for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("EnumType");
        s.field("id", &self.id);
        match self.declaration.get() {
            Some(Ok(declaration)) => s.field("constants", &declaration.len()),
            Some(Err(err)) => s.field("error", err),
            None => s.field("discovered", &false),
        };
        s.finish()
    }
}

impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod tests;
