//! Enum types shared by the unit tests.
//!
//! The catalog is process-wide. Types from `declare_enum!` are keyed by their
//! module path, but the hand-built `static` registries below use their bare
//! name as id, so those names must stay unique within the test binary.

use crate::declaration::Member;
use crate::registry::EnumType;
use crate::{Record, Value, declare_enum};

declare_enum! {
    /// Seven days, no payload.
    pub enum Week {
        MONDAY,
        TUESDAY,
        WEDNESDAY,
        THURSDAY,
        FRIDAY,
        SATURDAY,
        SUNDAY,
    }
}

declare_enum! {
    /// `[mass (kg), radius (m)]`.
    pub enum Planet {
        MERCURY = [3.303e+23, 2.4397e6],
        VENUS = [4.869e+24, 6.0518e6],
        EARTH = [5.976e+24, 6.37814e6],
        MARS = [6.421e+23, 3.3972e6],
    }
}

declare_enum! {
    pub enum Color {
        RED = "red",
        GREEN = "green",
        BLUE = "blue",
        /// Same payload as `BLUE`; lookups by value find `BLUE` first.
        NAVY = "blue",
    }
}

const GRAVITATIONAL_CONSTANT: f64 = 6.67300E-11;

pub fn body_record(args: Vec<Value>) -> Result<Value, String> {
    match args.as_slice() {
        [Value::Float(mass), Value::Float(radius)] => Ok(Record::new("Body")
            .with("mass", *mass)
            .with("radius", *radius)
            .with("gravity", GRAVITATIONAL_CONSTANT * mass / (radius * radius))
            .into()),
        other => Err(format!("expected [mass, radius], got {} arguments", other.len())),
    }
}

declare_enum! {
    /// Payloads built by [`body_record`].
    pub enum Body with body_record {
        MOON = [7.342e22, 1.7374e6],
        SUN = [1.989e30, 6.9634e8],
    }
}

declare_enum! {
    /// `BROKEN` cannot be constructed.
    pub enum Fragile with body_record {
        SOLID = [1.0, 1.0],
        BROKEN = "not a body",
    }
}

declare_enum! {
    pub enum Nothing {}
}

/// Shares its short name and first constant with [`shipping::Status`].
pub mod billing {
    use crate::declare_enum;

    declare_enum! {
        pub enum Status {
            OPEN,
            PAID,
        }
    }
}

pub mod shipping {
    use crate::declare_enum;

    declare_enum! {
        pub enum Status {
            OPEN,
            SHIPPED,
            DELIVERED,
        }
    }
}

fn duplicate_members() -> Vec<Member> {
    vec![
        Member::protected("A", Value::Null),
        Member::protected("B", Value::Null),
        Member::protected("A", Value::Null),
    ]
}

pub static DUPLICATED: EnumType = EnumType::new("Duplicated", duplicate_members);

fn mixed_visibility_members() -> Vec<Member> {
    vec![
        Member::public("VERSION", 3),
        Member::protected("LOW", 1),
        Member::public("DEFAULT_NAME", "low"),
        Member::protected("HIGH", 10),
    ]
}

pub static PRIORITY: EnumType = EnumType::new("Priority", mixed_visibility_members);

fn wide_members() -> Vec<Member> {
    (0..65).map(|i| Member::protected(format!("C{i}"), i)).collect()
}

/// One constant more than a bitmask can hold.
pub static WIDE: EnumType = EnumType::new("Wide", wide_members);

fn full_width_members() -> Vec<Member> {
    (0..64).map(|i| Member::protected(format!("F{i}"), i)).collect()
}

/// Exactly as many constants as a bitmask can hold.
pub static FULL_WIDTH: EnumType = EnumType::new("FullWidth", full_width_members);
