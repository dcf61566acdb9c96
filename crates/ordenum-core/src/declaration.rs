//! Enum declarations: the ordered `(name, raw payload)` table of one enum type.
//!
//! A declaration is produced from the members a type exposes through its
//! [`DeclarationSource`]. Only non-public members are enum constants; public
//! members are ordinary API constants living next to them and are skipped.
//! Ordinals are dense positions among the eligible members, in source order.

use ordenum_common::{EnumError, Result, Value};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// Produces the members of a type in source order.
pub type DeclarationSource = fn() -> Vec<Member>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Non-public members carry enum data.
    #[inline]
    pub const fn is_enum_data(self) -> bool {
        !matches!(self, Visibility::Public)
    }
}

/// A constant-like member as reported by a declaration source.
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub name: String,
    pub value: Value,
    pub visibility: Visibility,
}

impl Member {
    pub fn new(name: impl Into<String>, value: impl Into<Value>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            visibility,
        }
    }

    /// An enum constant.
    pub fn protected(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, value, Visibility::Protected)
    }

    /// A plain public constant; never part of the enum domain.
    pub fn public(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, value, Visibility::Public)
    }
}

/// One declared constant.
#[derive(Clone, Debug, PartialEq)]
pub struct Constant {
    pub name: String,
    pub raw: Value,
}

/// The ordered constant table of one enum type.
#[derive(Clone, Debug, Default)]
pub struct Declaration {
    constants: Vec<Constant>,
    index: FxHashMap<String, usize>,
}

impl Declaration {
    /// Builds the declaration of `enum_name` from its members.
    ///
    /// Fails with `EnumError::Declaration` when an eligible member has an empty
    /// name or a name already used by an earlier eligible member.
    pub fn discover(enum_name: &str, members: Vec<Member>) -> Result<Self> {
        let mut constants = Vec::with_capacity(members.len());
        let mut index = FxHashMap::default();

        for member in members {
            if !member.visibility.is_enum_data() {
                trace!(enum_name, member = %member.name, "skipping public constant");
                continue;
            }
            if member.name.is_empty() {
                debug!(enum_name, ordinal = constants.len(), "rejecting unnamed constant");
                return Err(EnumError::declaration(
                    enum_name,
                    format!("constant at position {} has an empty name", constants.len()),
                ));
            }
            if index.contains_key(&member.name) {
                debug!(enum_name, name = %member.name, "rejecting duplicate constant");
                return Err(EnumError::declaration(
                    enum_name,
                    format!("constant `{}` is declared more than once", member.name),
                ));
            }
            index.insert(member.name.clone(), constants.len());
            constants.push(Constant {
                name: member.name,
                raw: member.value,
            });
        }

        trace!(enum_name, count = constants.len(), "declaration discovered");
        Ok(Self { constants, index })
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    pub fn get(&self, ordinal: usize) -> Option<&Constant> {
        self.constants.get(ordinal)
    }

    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constants.iter().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
#[path = "../tests/declaration_tests.rs"]
mod tests;
