use super::*;

#[test]
fn test_equality_is_exact() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
    assert_ne!(Value::from("1"), Value::from(1));
    assert_eq!(Value::from([1.5, 2.5]), Value::Array(vec![Value::Float(1.5), Value::Float(2.5)]));
}

#[test]
fn test_option_conversion() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
}

#[test]
fn test_kind_parsing() {
    assert_eq!("string".parse::<ValueKind>().unwrap(), ValueKind::String);
    assert_eq!("integer".parse::<ValueKind>().unwrap(), ValueKind::Int);
    assert_eq!("mixed".parse::<ValueKind>().unwrap(), ValueKind::Mixed);
    assert_eq!(
        "Planet".parse::<ValueKind>().unwrap(),
        ValueKind::Class("Planet".to_string())
    );
    assert!("".parse::<ValueKind>().is_err());
}

#[test]
fn test_nullable_contract() {
    let nullable = ValueType::new(ValueKind::String, true);
    assert!(nullable.accepts(&Value::Null));
    assert!(nullable.accepts(&Value::from("a")));
    assert!(!nullable.accepts(&Value::from(5)));

    let strict = ValueType::new(ValueKind::String, false);
    let err = strict.check(&Value::Null).unwrap_err();
    assert_eq!(
        err,
        EnumError::InvalidValueType {
            expected: "string".to_string(),
            found: "null".to_string(),
        }
    );
}

#[test]
fn test_mixed_accepts_null() {
    let mixed = ValueType::new(ValueKind::Mixed, false);
    assert!(mixed.accepts(&Value::Null));
    assert!(mixed.accepts(&Value::Array(vec![])));
    assert_eq!(mixed.to_string(), "mixed");
}

#[test]
fn test_class_kind_matches_records_and_enums() {
    let kind = ValueKind::Class("Point".to_string());
    let point = Record::new("Point").with("x", 1).with("y", 2);
    assert!(kind.matches(&Value::from(point.clone())));
    assert!(!kind.matches(&Value::from(Record::new("Vector"))));

    let week = ValueKind::Class("calendar::Week".to_string());
    let monday = EnumValue {
        type_id: "calendar::Week",
        enum_name: "Week",
        name: "MONDAY",
        ordinal: 0,
    };
    assert!(week.matches(&Value::Enum(monday)));
    assert!(!ValueKind::Class("Week".to_string()).matches(&Value::Enum(monday)));
    assert!(ValueKind::Object.matches(&Value::Enum(monday)));
    assert!(ValueKind::Object.matches(&Value::from(point)));
    assert!(!ValueKind::Object.matches(&Value::from(1)));
}

#[test]
fn test_json_conversion() {
    let json = serde_json::json!({ "mass": 5.976e24, "moons": 1, "tags": ["blue"] });
    let value = Value::from_json(&json);
    match &value {
        Value::Object(fields) => {
            assert_eq!(fields.get("moons"), Some(&Value::Int(1)));
            assert_eq!(fields.get("mass"), Some(&Value::Float(5.976e24)));
        }
        other => panic!("expected object, got {other:?}"),
    }
    assert_eq!(value.to_json(), json);
    assert_eq!(serde_json::to_value(&value).unwrap(), json);
}

#[test]
fn test_display_nullable_contract() {
    assert_eq!(ValueType::new(ValueKind::Int, true).to_string(), "?int");
    assert_eq!(
        ValueType::new(ValueKind::Class("Week".into()), false).to_string(),
        "Week"
    );
}

#[test]
fn test_enum_values_with_same_short_name_differ() {
    let billing_open = EnumValue {
        type_id: "billing::Status",
        enum_name: "Status",
        name: "OPEN",
        ordinal: 0,
    };
    let shipping_open = EnumValue {
        type_id: "shipping::Status",
        ..billing_open
    };
    assert_ne!(Value::Enum(billing_open), Value::Enum(shipping_open));
    assert_eq!(Value::Enum(billing_open).to_string(), Value::Enum(shipping_open).to_string());
    assert_eq!(Value::Enum(shipping_open).kind_name(), "shipping::Status");
}
