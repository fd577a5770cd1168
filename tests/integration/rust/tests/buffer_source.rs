//! Buffer-source conversion integration tests
//!
//! The brand acceptance matrix (every buffer-source converter against every
//! buffer-source kind), the composite types, and the detached / shared /
//! resizable / realm checks.

use conversions::{buffer_source, convert, ConversionOptions, IdlType};
use core_types::{
    BufferValue, FunctionKind, FunctionValue, RealmId, SymbolValue, TypedArrayKind, Value,
    ViewValue,
};

fn defaults() -> ConversionOptions {
    ConversionOptions::default()
}

/// One value of every buffer-source brand, keyed by its converter.
fn buffer_source_values() -> Vec<(IdlType, Value)> {
    vec![
        (IdlType::ArrayBuffer, Value::buffer(BufferValue::new(0))),
        (
            IdlType::DataView,
            Value::view(ViewValue::data_view(BufferValue::new(0), 0, None).unwrap()),
        ),
        (
            IdlType::Int8Array,
            Value::view(ViewValue::new_typed(TypedArrayKind::Int8, 0)),
        ),
        (
            IdlType::Int16Array,
            Value::view(ViewValue::new_typed(TypedArrayKind::Int16, 0)),
        ),
        (
            IdlType::Int32Array,
            Value::view(ViewValue::new_typed(TypedArrayKind::Int32, 0)),
        ),
        (
            IdlType::Uint8Array,
            Value::view(ViewValue::new_typed(TypedArrayKind::Uint8, 0)),
        ),
        (
            IdlType::Uint16Array,
            Value::view(ViewValue::new_typed(TypedArrayKind::Uint16, 0)),
        ),
        (
            IdlType::Uint32Array,
            Value::view(ViewValue::new_typed(TypedArrayKind::Uint32, 0)),
        ),
        (
            IdlType::Uint8ClampedArray,
            Value::view(ViewValue::new_typed(TypedArrayKind::Uint8Clamped, 0)),
        ),
        (
            IdlType::Float32Array,
            Value::view(ViewValue::new_typed(TypedArrayKind::Float32, 0)),
        ),
        (
            IdlType::Float64Array,
            Value::view(ViewValue::new_typed(TypedArrayKind::Float64, 0)),
        ),
    ]
}

/// Values no buffer-source converter may accept.
fn non_buffer_values() -> Vec<Value> {
    vec![
        Value::undefined(),
        Value::null(),
        Value::boolean(true),
        Value::boolean(false),
        Value::number(f64::INFINITY),
        Value::number(f64::NAN),
        Value::number(0.0),
        Value::string(""),
        Value::symbol(SymbolValue::new(None)),
        Value::object(),
        Value::function(FunctionValue::new("", FunctionKind::Arrow)),
    ]
}

#[test]
fn test_brand_acceptance_matrix() {
    let values = buffer_source_values();
    for (converter, _) in &values {
        for (brand, value) in &values {
            let result = convert(*converter, value, &defaults());
            if converter == brand {
                let out = result.unwrap_or_else(|err| {
                    panic!("{} should accept its own brand: {}", converter, err)
                });
                assert_eq!(&out, value, "{} must return its input", converter);
            } else {
                assert!(
                    result.is_err(),
                    "{} must reject a {} value",
                    converter,
                    brand
                );
            }
        }
    }
}

#[test]
fn test_every_converter_rejects_non_buffer_values() {
    let mut converters: Vec<IdlType> =
        buffer_source_values().into_iter().map(|(ty, _)| ty).collect();
    converters.push(IdlType::ArrayBufferView);
    converters.push(IdlType::BufferSource);
    converters.push(IdlType::SharedArrayBuffer);

    for converter in converters {
        for value in non_buffer_values() {
            assert!(
                convert(converter, &value, &defaults()).is_err(),
                "{} must reject {:?}",
                converter,
                value
            );
        }
    }
}

#[test]
fn test_array_buffer_view_accepts_views_only() {
    for (brand, value) in buffer_source_values() {
        let result = convert(IdlType::ArrayBufferView, &value, &defaults());
        if brand == IdlType::ArrayBuffer {
            assert!(result.is_err());
        } else {
            assert_eq!(result.unwrap(), value);
        }
    }
}

#[test]
fn test_buffer_source_accepts_everything() {
    for (_, value) in buffer_source_values() {
        assert_eq!(convert(IdlType::BufferSource, &value, &defaults()).unwrap(), value);
    }
}

#[test]
fn test_detached_buffer_rejected_everywhere() {
    let buffer = BufferValue::new(16);
    let typed =
        ViewValue::typed_from_buffer(TypedArrayKind::Uint8, buffer.clone(), 0, None).unwrap();
    let dv = ViewValue::data_view(buffer.clone(), 0, None).unwrap();
    buffer.detach();

    let generous = ConversionOptions {
        allow_shared: true,
        allow_resizable: true,
        ..Default::default()
    };

    assert!(convert(IdlType::ArrayBuffer, &Value::buffer(buffer.clone()), &generous).is_err());
    assert!(convert(IdlType::Uint8Array, &Value::view(typed.clone()), &generous).is_err());
    assert!(convert(IdlType::DataView, &Value::view(dv.clone()), &generous).is_err());
    assert!(convert(IdlType::ArrayBufferView, &Value::view(typed.clone()), &generous).is_err());
    assert!(convert(IdlType::BufferSource, &Value::buffer(buffer), &generous).is_err());
    assert!(convert(IdlType::BufferSource, &Value::view(dv), &generous).is_err());
}

#[test]
fn test_shared_buffer_needs_opt_in() {
    let shared = Value::buffer(BufferValue::new_shared(8));
    assert!(convert(IdlType::ArrayBuffer, &shared, &defaults()).is_err());
    assert!(convert(IdlType::BufferSource, &shared, &defaults()).is_err());

    let allowed = ConversionOptions {
        allow_shared: true,
        ..Default::default()
    };
    assert_eq!(convert(IdlType::ArrayBuffer, &shared, &allowed).unwrap(), shared);
    assert_eq!(convert(IdlType::BufferSource, &shared, &allowed).unwrap(), shared);

    // the SharedArrayBuffer brand itself needs no opt-in
    assert_eq!(
        convert(IdlType::SharedArrayBuffer, &shared, &defaults()).unwrap(),
        shared
    );
}

#[test]
fn test_shared_array_buffer_requires_shared_brand() {
    let plain = Value::buffer(BufferValue::new(8));
    assert!(convert(IdlType::SharedArrayBuffer, &plain, &defaults()).is_err());
    // even with allow_shared, a plain buffer is the wrong brand
    let allowed = ConversionOptions {
        allow_shared: true,
        ..Default::default()
    };
    assert!(convert(IdlType::SharedArrayBuffer, &plain, &allowed).is_err());
}

#[test]
fn test_shared_view_needs_opt_in() {
    let shared = BufferValue::new_shared(8);
    let view = Value::view(
        ViewValue::typed_from_buffer(TypedArrayKind::Uint16, shared, 0, None).unwrap(),
    );
    assert!(convert(IdlType::Uint16Array, &view, &defaults()).is_err());
    assert!(convert(IdlType::ArrayBufferView, &view, &defaults()).is_err());

    let allowed = ConversionOptions {
        allow_shared: true,
        ..Default::default()
    };
    assert_eq!(convert(IdlType::Uint16Array, &view, &allowed).unwrap(), view);
    assert_eq!(convert(IdlType::ArrayBufferView, &view, &allowed).unwrap(), view);
}

#[test]
fn test_resizable_buffer_needs_opt_in() {
    let resizable = Value::buffer(BufferValue::new_resizable(8));
    assert!(convert(IdlType::ArrayBuffer, &resizable, &defaults()).is_err());

    let allowed = ConversionOptions {
        allow_resizable: true,
        ..Default::default()
    };
    assert_eq!(convert(IdlType::ArrayBuffer, &resizable, &allowed).unwrap(), resizable);

    // growable shared buffers need both opt-ins through the plain converter
    let growable = Value::buffer(BufferValue::new_shared_growable(8));
    assert!(convert(IdlType::ArrayBuffer, &growable, &allowed).is_err());
    let both = ConversionOptions {
        allow_shared: true,
        allow_resizable: true,
        ..Default::default()
    };
    assert_eq!(convert(IdlType::ArrayBuffer, &growable, &both).unwrap(), growable);

    // ... and only the resizable opt-in through the shared converter
    assert!(convert(IdlType::SharedArrayBuffer, &growable, &defaults()).is_err());
    assert_eq!(
        convert(IdlType::SharedArrayBuffer, &growable, &allowed).unwrap(),
        growable
    );
}

#[test]
fn test_cross_realm_brand_check() {
    let worker = RealmId::new(1);
    let foreign = Value::buffer(BufferValue::new(8).in_realm(worker));
    assert!(convert(IdlType::ArrayBuffer, &foreign, &defaults()).is_err());

    let policy = ConversionOptions {
        realm: Some(worker),
        ..Default::default()
    };
    assert_eq!(convert(IdlType::ArrayBuffer, &foreign, &policy).unwrap(), foreign);

    // the override also makes same-realm values foreign
    let local = Value::buffer(BufferValue::new(8));
    assert!(convert(IdlType::ArrayBuffer, &local, &policy).is_err());
}

#[test]
fn test_cross_realm_view() {
    let worker = RealmId::new(2);
    let view = Value::view(
        ViewValue::new_typed(TypedArrayKind::Float64, 1).in_realm(worker),
    );
    assert!(convert(IdlType::Float64Array, &view, &defaults()).is_err());

    let policy = ConversionOptions {
        realm: Some(worker),
        ..Default::default()
    };
    assert_eq!(convert(IdlType::Float64Array, &view, &policy).unwrap(), view);
}

#[test]
fn test_typed_function_surface_matches_registry() {
    // The typed entry points return the strongly-typed view/buffer values.
    let buf = BufferValue::new(4);
    let out = buffer_source::array_buffer(&Value::buffer(buf.clone()), &defaults()).unwrap();
    assert!(out.ptr_eq(&buf));

    let view = ViewValue::new_typed(TypedArrayKind::Int32, 2);
    let out =
        buffer_source::int32_array(&Value::view(view.clone()), &defaults()).unwrap();
    assert_eq!(out, view);
    assert_eq!(out.length(), 2);
    assert_eq!(out.byte_length(), 8);
}
