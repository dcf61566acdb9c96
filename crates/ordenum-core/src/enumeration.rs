//! Declaring enum types.
//!
//! [`declare_enum!`] turns a constant table into a marker type with one
//! accessor per constant and an [`Enumeration`] impl backed by a `static`
//! [`EnumType`] registry. The registry id is the module path plus the type
//! name, so equally named types in different modules stay distinct:
//!
//! ```
//! use ordenum_core::{Enumeration, declare_enum};
//!
//! declare_enum! {
//!     pub enum Suit {
//!         CLUBS = "c",
//!         DIAMONDS = "d",
//!         HEARTS = "h",
//!         SPADES = "s",
//!     }
//! }
//!
//! let hearts = Suit::HEARTS().unwrap();
//! assert_eq!(hearts.ordinal(), 2);
//! assert!(std::ptr::eq(hearts, Suit::from_name("HEARTS").unwrap()));
//! assert_eq!(Suit::from_value(&"s".into()).unwrap().name(), "SPADES");
//! ```
//!
//! A custom payload constructor receives the spread raw payload:
//!
//! ```
//! use ordenum_core::{Record, Value, declare_enum};
//!
//! fn coin(args: Vec<Value>) -> Result<Value, String> {
//!     match args.as_slice() {
//!         [Value::Int(cents)] => Ok(Record::new("Coin").with("cents", *cents).into()),
//!         other => Err(format!("expected cents, got {} arguments", other.len())),
//!     }
//! }
//!
//! declare_enum! {
//!     pub enum Coin with coin {
//!         PENNY = 1,
//!         DIME = 10,
//!     }
//! }
//!
//! let dime = Coin::DIME().unwrap();
//! assert_eq!(dime.value().to_string(), r#"Coin{"cents":10}"#);
//! ```

use crate::enum_map::EnumMap;
use crate::enum_set::EnumSet;
use crate::instance::EnumInstance;
use crate::registry::EnumType;
use ordenum_common::{Result, Value, ValueKind};

/// A declared enum type.
pub trait Enumeration {
    /// The registry of this type.
    fn enum_type() -> &'static EnumType;

    /// All constants in ordinal order.
    fn values() -> Result<&'static [&'static EnumInstance]> {
        Self::enum_type().all_instances()
    }

    fn names() -> Result<Vec<&'static str>> {
        Self::enum_type().names()
    }

    fn count() -> Result<usize> {
        Self::enum_type().len()
    }

    fn from_name(name: &str) -> Result<&'static EnumInstance> {
        Self::enum_type().resolve_by_name(name)
    }

    fn try_from_name(name: &str) -> Result<Option<&'static EnumInstance>> {
        Self::enum_type().try_resolve_by_name(name)
    }

    fn from_name_ignore_case(name: &str) -> Result<Option<&'static EnumInstance>> {
        Self::enum_type().resolve_by_name_ignore_case(name)
    }

    fn from_ordinal(ordinal: usize) -> Result<Option<&'static EnumInstance>> {
        Self::enum_type().by_ordinal(ordinal)
    }

    fn from_value(value: &Value) -> Result<&'static EnumInstance> {
        Self::enum_type().resolve_by_value(value)
    }

    fn try_from_value(value: &Value) -> Result<Option<&'static EnumInstance>> {
        Self::enum_type().try_resolve_by_value(value)
    }

    fn random() -> Result<Option<&'static EnumInstance>> {
        Self::enum_type().random_instance()
    }

    /// An empty set of this type.
    fn empty_set() -> Result<EnumSet> {
        EnumSet::new(Self::enum_type())
    }

    /// The full domain as a set.
    fn all() -> Result<EnumSet> {
        EnumSet::all_of(Self::enum_type())
    }

    fn set_of(items: &[&EnumInstance]) -> Result<EnumSet> {
        EnumSet::of(Self::enum_type(), items.iter().copied())
    }

    /// An empty map keyed by this type.
    fn map(kind: ValueKind, nullable: bool) -> Result<EnumMap> {
        EnumMap::new(Self::enum_type(), kind, nullable)
    }

    /// The `EnumMap` value kind accepting instances of this type.
    fn kind() -> ValueKind {
        ValueKind::Class(Self::enum_type().id().to_string())
    }
}

/// Declares an enum type.
///
/// ```text
/// declare_enum! {
///     /// docs
///     pub enum Name [with constructor_path] {
///         CONSTANT [= raw payload],
///         ...
///     }
/// }
/// ```
///
/// Raw payloads are any expression convertible into [`Value`]; constants
/// without one have a `Null` raw payload.
#[macro_export]
macro_rules! declare_enum {
    (@raw) => {
        $crate::Value::Null
    };
    (@raw $raw:expr) => {
        $crate::Value::from($raw)
    };
    (@ctor) => {
        $crate::default_payload
    };
    (@ctor $ctor:path) => {
        $ctor
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident $(with $ctor:path)? {
            $(
                $(#[$cmeta:meta])*
                $constant:ident $(= $raw:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $ty;

        impl $ty {
            $(
                $(#[$cmeta])*
                #[allow(non_snake_case)]
                pub fn $constant() -> $crate::Result<&'static $crate::EnumInstance> {
                    <Self as $crate::Enumeration>::from_name(::core::stringify!($constant))
                }
            )*
        }

        impl $crate::Enumeration for $ty {
            fn enum_type() -> &'static $crate::EnumType {
                fn members() -> ::std::vec::Vec<$crate::Member> {
                    ::std::vec![
                        $(
                            $crate::Member::protected(
                                ::core::stringify!($constant),
                                $crate::declare_enum!(@raw $($raw)?),
                            )
                        ),*
                    ]
                }
                static TYPE: $crate::EnumType = $crate::EnumType::qualified(
                    ::core::concat!(::core::module_path!(), "::", ::core::stringify!($ty)),
                    ::core::stringify!($ty),
                    members,
                    $crate::declare_enum!(@ctor $($ctor)?),
                );
                &TYPE
            }
        }
    };
}

#[cfg(test)]
#[path = "../tests/enumeration_tests.rs"]
mod tests;
