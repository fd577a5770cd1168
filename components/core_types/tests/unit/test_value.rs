//! Unit tests for the Value enum

use core_types::{Class, ErrorKind, ErrorValue, FunctionKind, FunctionValue, ObjectData, Value};

#[test]
fn test_value_variants() {
    assert!(Value::undefined().is_undefined());
    assert!(Value::null().is_null());
    assert!(Value::boolean(true).is_boolean());
    assert!(Value::number(1.5).is_number());
    assert!(Value::string("x").is_string());
    assert!(Value::bigint(1).is_bigint());
    assert!(Value::object().is_object());
}

#[test]
fn test_accessors() {
    assert_eq!(Value::boolean(true).as_boolean(), Some(true));
    assert_eq!(Value::number(2.0).as_number(), Some(2.0));
    assert_eq!(Value::number(2.0).as_boolean(), None);
    assert_eq!(
        Value::string("abc").as_string().map(|s| s.to_utf8_lossy()),
        Some("abc".to_string())
    );
}

#[test]
fn test_classify_matches_conversion_view() {
    // Callable and exotic objects classify as Object even though typeof
    // distinguishes them.
    let func = Value::function(FunctionValue::new("f", FunctionKind::Async));
    assert_eq!(func.type_of(), "function");
    assert_eq!(func.classify(), Class::Object);

    let err = Value::error(ErrorValue::new(ErrorKind::Error, "boom"));
    assert_eq!(err.type_of(), "object");
    assert_eq!(err.classify(), Class::Object);
}

#[test]
fn test_object_primitive_hints() {
    let data = ObjectData::new()
        .with_value_of(Value::number(5.0))
        .with_to_string("foo");
    assert_eq!(data.value_of(), Some(&Value::number(5.0)));
    assert_eq!(
        data.to_string_override().map(|s| s.to_utf8_lossy()),
        Some("foo".to_string())
    );
    assert_eq!(data.default_tag(), "[object Object]");
}

#[test]
fn test_display_follows_string_formatting() {
    assert_eq!(Value::undefined().to_string(), "undefined");
    assert_eq!(Value::null().to_string(), "null");
    assert_eq!(Value::boolean(false).to_string(), "false");
    assert_eq!(Value::number(10.0).to_string(), "10");
    assert_eq!(Value::number(-10.0).to_string(), "-10");
    assert_eq!(Value::bigint(0).to_string(), "0");
}
