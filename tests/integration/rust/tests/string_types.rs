//! String conversion integration tests
//!
//! DOMString, ByteString and USVString behavior, including the surrogate
//! handling matrix.

use conversions::{string, ConversionOptions};
use core_types::{JsString, ObjectData, SymbolValue, Value};

fn defaults() -> ConversionOptions {
    ConversionOptions::default()
}

fn dom(value: &Value) -> JsString {
    string::dom_string(value, &defaults()).unwrap()
}

#[test]
fn test_primitive_stringification() {
    assert_eq!(dom(&Value::undefined()), JsString::from("undefined"));
    assert_eq!(dom(&Value::null()), JsString::from("null"));
    assert_eq!(dom(&Value::boolean(true)), JsString::from("true"));
    assert_eq!(dom(&Value::boolean(false)), JsString::from("false"));
    assert_eq!(dom(&Value::string("")), JsString::from(""));
    assert_eq!(dom(&Value::string("whee")), JsString::from("whee"));
}

#[test]
fn test_number_formatting() {
    let cases: &[(f64, &str)] = &[
        (f64::NAN, "NaN"),
        (0.0, "0"),
        (-0.0, "0"),
        (f64::INFINITY, "Infinity"),
        (f64::NEG_INFINITY, "-Infinity"),
        (10.0, "10"),
        (-10.0, "-10"),
        (3.14, "3.14"),
    ];
    for &(input, expected) in cases {
        assert_eq!(dom(&Value::number(input)), JsString::from(expected));
    }
}

#[test]
fn test_treat_null_as_empty_string() {
    let opts = ConversionOptions {
        treat_null_as_empty_string: true,
        ..Default::default()
    };
    assert_eq!(string::dom_string(&Value::null(), &opts).unwrap(), JsString::new());
    // undefined is unaffected
    assert_eq!(
        string::dom_string(&Value::undefined(), &opts).unwrap(),
        JsString::from("undefined")
    );
}

#[test]
fn test_symbol_throws_for_every_string_type() {
    let sym = Value::symbol(SymbolValue::new(Some("dummy description".to_string())));
    assert!(string::dom_string(&sym, &defaults()).is_err());
    assert!(string::byte_string(&sym).is_err());
    assert!(string::usv_string(&sym).is_err());
}

#[test]
fn test_object_prefers_to_string_over_value_of() {
    let obj = Value::object_from(
        ObjectData::new()
            .with_value_of(Value::number(5.0))
            .with_to_string("foo"),
    );
    assert_eq!(dom(&obj), JsString::from("foo"));
    assert_eq!(string::usv_string(&obj).unwrap(), JsString::from("foo"));
}

#[test]
fn test_plain_object_stringifies_to_tag() {
    assert_eq!(dom(&Value::object()), JsString::from("[object Object]"));
}

#[test]
fn test_big_integer_stringifies_to_digits() {
    assert_eq!(dom(&Value::bigint(10)), JsString::from("10"));
    assert_eq!(dom(&Value::bigint(-3)), JsString::from("-3"));
}

// The surrogate matrix: each entry is (input code units, the USVString
// repair output). DOMString passes every input through; ByteString rejects
// them all.
const SURROGATE_CASES: &[(&[u16], &[u16])] = &[
    (&[0xD83D], &[0xFFFD]),
    (&[0xD83D, 0x61], &[0xFFFD, 0x61]),
    (&[0x61, 0xD83D], &[0x61, 0xFFFD]),
    (&[0x61, 0xD83D, 0x61], &[0x61, 0xFFFD, 0x61]),
    (&[0xDE00], &[0xFFFD]),
    (&[0xDE00, 0x61], &[0xFFFD, 0x61]),
    (&[0x61, 0xDE00], &[0x61, 0xFFFD]),
    (&[0x61, 0xDE00, 0x61], &[0x61, 0xFFFD, 0x61]),
    (&[0xDE00, 0xD830], &[0xFFFD, 0xFFFD]),
];

#[test]
fn test_dom_string_passes_invalid_surrogates_through() {
    for (input, _) in SURROGATE_CASES {
        let value = Value::String(JsString::from_code_units(input.to_vec()));
        assert_eq!(dom(&value), JsString::from_code_units(input.to_vec()));
    }
}

#[test]
fn test_dom_string_passes_valid_surrogates_through() {
    let pair = JsString::from_code_units(vec![0xD83D, 0xDE00]);
    assert_eq!(dom(&Value::String(pair.clone())), pair);
    assert_eq!(dom(&Value::string("中文")), JsString::from("中文"));
}

#[test]
fn test_byte_string_accepts_latin1() {
    assert_eq!(
        string::byte_string(&Value::string("whee")).unwrap(),
        JsString::from("whee")
    );
    assert_eq!(
        string::byte_string(&Value::number(42.0)).unwrap(),
        JsString::from("42")
    );
}

#[test]
fn test_byte_string_rejects_wide_code_units() {
    assert!(string::byte_string(&Value::string("中文")).is_err());
    let pair = Value::String(JsString::from_code_units(vec![0xD83D, 0xDE00]));
    assert!(string::byte_string(&pair).is_err());
    for (input, _) in SURROGATE_CASES {
        let value = Value::String(JsString::from_code_units(input.to_vec()));
        assert!(string::byte_string(&value).is_err());
    }
}

#[test]
fn test_usv_string_replaces_invalid_surrogates() {
    for (input, expected) in SURROGATE_CASES {
        let value = Value::String(JsString::from_code_units(input.to_vec()));
        assert_eq!(
            string::usv_string(&value).unwrap(),
            JsString::from_code_units(expected.to_vec()),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_usv_string_passes_valid_text_through() {
    let pair = JsString::from_code_units(vec![0xD83D, 0xDE00]);
    assert_eq!(string::usv_string(&Value::String(pair.clone())).unwrap(), pair);
    assert_eq!(
        string::usv_string(&Value::string("中文")).unwrap(),
        JsString::from("中文")
    );
    assert!(string::usv_string(&Value::string("abc"))
        .unwrap()
        .is_well_formed());
}
