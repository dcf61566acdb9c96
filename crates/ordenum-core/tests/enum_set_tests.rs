use super::*;
use crate::Enumeration;
use crate::test_fixtures::{Color, DUPLICATED, FULL_WIDTH, WIDE, Week};

fn days(names: &[&str]) -> EnumSet {
    let items: Vec<_> = names.iter().map(|n| Week::from_name(n).unwrap()).collect();
    EnumSet::of(Week::enum_type(), items).unwrap()
}

#[test]
fn test_bitmask_scenario() {
    let set = days(&["FRIDAY", "MONDAY"]);
    assert_eq!(set.to_bitmask().unwrap(), 0b10001);
    assert_eq!(set.names(), ["MONDAY", "FRIDAY"]);
}

#[test]
fn test_bitmask_round_trip() {
    for mask in [0u64, 0b1, 0b1010101, 0b1111111, 0b0110110] {
        let set = EnumSet::from_bitmask(Week::enum_type(), mask).unwrap();
        assert_eq!(set.to_bitmask().unwrap(), mask);
        assert_eq!(EnumSet::from_bitmask(Week::enum_type(), set.to_bitmask().unwrap()).unwrap(), set);
    }
}

#[test]
fn test_bitmask_outside_domain() {
    let err = EnumSet::from_bitmask(Week::enum_type(), 1 << 7).unwrap_err();
    assert_eq!(
        err,
        EnumError::InvalidBitmask {
            enum_name: "Week".to_string(),
            mask: 1 << 7,
            size: 7,
        }
    );
}

#[test]
fn test_bitmask_domain_limits() {
    let full = EnumSet::all_of(&FULL_WIDTH).unwrap();
    assert_eq!(full.to_bitmask().unwrap(), u64::MAX);
    assert_eq!(EnumSet::from_bitmask(&FULL_WIDTH, u64::MAX).unwrap(), full);

    let wide = EnumSet::all_of(&WIDE).unwrap();
    assert_eq!(wide.len(), 65);
    assert!(matches!(
        wide.to_bitmask(),
        Err(EnumError::DomainTooLarge { size: 65, max: 64, .. })
    ));
    assert!(matches!(
        EnumSet::from_bitmask(&WIDE, 1),
        Err(EnumError::DomainTooLarge { .. })
    ));
}

#[test]
fn test_add_remove_contains() {
    let mut set = EnumSet::new(Week::enum_type()).unwrap();
    let tuesday = Week::TUESDAY().unwrap();
    assert!(set.is_empty());
    assert!(set.add(tuesday).unwrap());
    assert!(!set.add(tuesday).unwrap());
    assert!(set.contains(tuesday).unwrap());
    assert_eq!(set.len(), 1);
    assert!(set.remove(tuesday).unwrap());
    assert!(!set.remove(tuesday).unwrap());
    assert!(!set.contains(tuesday).unwrap());
}

#[test]
fn test_wrong_member_type() {
    let mut set = EnumSet::new(Week::enum_type()).unwrap();
    let red = Color::RED().unwrap();
    let expected = EnumError::TypeMismatch {
        expected: "Week".to_string(),
        found: "Color".to_string(),
    };
    assert_eq!(set.add(red).unwrap_err(), expected);
    assert_eq!(set.remove(red).unwrap_err(), expected);
    assert_eq!(set.contains(red).unwrap_err(), expected);
    assert!(EnumSet::of(Week::enum_type(), [red]).is_err());
}

#[test]
fn test_invalid_type_cannot_back_a_set() {
    assert!(matches!(
        EnumSet::new(&DUPLICATED),
        Err(EnumError::Declaration { .. })
    ));
}

#[test]
fn test_range_is_symmetric_and_inclusive() {
    let tuesday = Week::TUESDAY().unwrap();
    let friday = Week::FRIDAY().unwrap();
    let forward = EnumSet::range(tuesday, friday).unwrap();
    let backward = EnumSet::range(friday, tuesday).unwrap();
    assert_eq!(forward, backward);
    assert_eq!(forward.names(), ["TUESDAY", "WEDNESDAY", "THURSDAY", "FRIDAY"]);
    assert_eq!(EnumSet::range(tuesday, tuesday).unwrap().len(), 1);
    assert!(EnumSet::range(tuesday, Color::RED().unwrap()).is_err());
}

#[test]
fn test_set_algebra_laws() {
    let a = days(&["MONDAY", "TUESDAY", "WEDNESDAY"]);
    let b = days(&["WEDNESDAY", "THURSDAY"]);

    assert_eq!(a.union(&b).unwrap(), b.union(&a).unwrap());
    let both = a.intersect(&b).unwrap();
    assert!(both.is_subset(&a).unwrap());
    assert!(both.is_subset(&b).unwrap());
    assert_eq!(both.names(), ["WEDNESDAY"]);
    assert_eq!(a.diff(&b).unwrap(), a.intersect(&b.complement()).unwrap());
    assert_eq!(a.complement().complement(), a);
    assert_eq!(
        a.symmetric_diff(&b).unwrap().names(),
        ["MONDAY", "TUESDAY", "THURSDAY"]
    );
}

#[test]
fn test_operands_are_not_mutated() {
    let a = days(&["MONDAY"]);
    let b = days(&["SUNDAY"]);
    let _ = a.union(&b).unwrap();
    let _ = a.complement();
    assert_eq!(a.names(), ["MONDAY"]);
    assert_eq!(b.names(), ["SUNDAY"]);
}

#[test]
fn test_cross_type_algebra_is_rejected() {
    let week = EnumSet::all_of(Week::enum_type()).unwrap();
    let colors = EnumSet::all_of(Color::enum_type()).unwrap();
    assert!(matches!(week.union(&colors), Err(EnumError::TypeMismatch { .. })));
    assert!(week.intersect(&colors).is_err());
    assert!(week.diff(&colors).is_err());
    assert!(week.is_subset(&colors).is_err());
}

#[test]
fn test_complement_of_empty_is_domain() {
    let empty = EnumSet::new(Week::enum_type()).unwrap();
    assert_eq!(empty.complement(), EnumSet::all_of(Week::enum_type()).unwrap());
    assert!(empty.is_disjoint(&empty.complement()).unwrap());
}

#[test]
fn test_functional_views() {
    let week = EnumSet::all_of(Week::enum_type()).unwrap();
    let weekend = week.filter(|d| d.name().starts_with('S'));
    assert_eq!(weekend.names(), ["SATURDAY", "SUNDAY"]);
    assert_eq!(week.map(|d| d.ordinal()), [0, 1, 2, 3, 4, 5, 6]);
    assert!(week.any(|d| d.is("FRIDAY")));
    assert!(week.all(|d| d.ordinal() < 7));
    assert!(week.none(|d| d.is("FUNDAY")));
    assert_eq!(week.find(|d| d.name().starts_with('T')).map(|d| d.name()), Some("TUESDAY"));
    assert_eq!(week.reduce(0, |sum, d| sum + d.ordinal()), 21);
    assert_eq!(weekend.first().map(|d| d.name()), Some("SATURDAY"));
    assert_eq!(weekend.last().map(|d| d.name()), Some("SUNDAY"));
}

#[test]
fn test_empty_set_views() {
    let empty = EnumSet::new(Week::enum_type()).unwrap();
    assert!(empty.first().is_none());
    assert!(empty.last().is_none());
    assert!(empty.all(|_| false));
    assert!(!empty.any(|_| true));
    assert_eq!(empty.to_bitmask().unwrap(), 0);
}

#[test]
fn test_iteration_is_ordered_and_restartable() {
    let set = days(&["SUNDAY", "WEDNESDAY", "MONDAY"]);
    let first_pass: Vec<_> = set.iter().map(|d| d.ordinal()).collect();
    let second_pass: Vec<_> = (&set).into_iter().map(|d| d.ordinal()).collect();
    assert_eq!(first_pass, [0, 2, 6]);
    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_retain_clear_and_debug() {
    let mut set = EnumSet::all_of(Week::enum_type()).unwrap();
    set.retain(|d| d.ordinal() % 3 == 0);
    assert_eq!(format!("{set:?}"), r#"Week{"MONDAY", "THURSDAY", "SUNDAY"}"#);
    set.clear();
    assert!(set.is_empty());
}
