//! Buffer-source conversions: buffers, typed arrays, DataView, and the
//! composite `ArrayBufferView` / `BufferSource` types.
//!
//! Every conversion here layers the same three independent checks on top of
//! a brand + realm check: detached buffers are always rejected, shared
//! buffers are rejected unless `allow_shared`, and resizable (or growable)
//! buffers are rejected unless `allow_resizable`. View conversions apply
//! the buffer checks to the underlying buffer.

use core_types::{
    BufferValue, ConversionError, ConversionResult, TypedArrayKind, Value, ViewKind, ViewValue,
};

use crate::options::{check_realm, ConversionOptions};

fn indefinite_article(name: &str) -> &'static str {
    match name.chars().next() {
        Some('A' | 'E' | 'I' | 'O' | 'U') => "an",
        _ => "a",
    }
}

fn wrong_brand(name: &str) -> ConversionError {
    ConversionError::type_error(format!(
        "value is not {} {} object",
        indefinite_article(name),
        name
    ))
}

/// The three flag checks shared by every buffer-source conversion.
fn validate_buffer(
    buffer: &BufferValue,
    options: &ConversionOptions,
    what: &str,
) -> ConversionResult<()> {
    if buffer.is_detached() {
        return Err(ConversionError::type_error(format!("{} is detached", what)));
    }
    if buffer.is_shared() && !options.allow_shared {
        return Err(ConversionError::type_error(format!(
            "{} is shared, which is not allowed here",
            what
        )));
    }
    if buffer.is_resizable() && !options.allow_resizable {
        return Err(ConversionError::type_error(format!(
            "{} is resizable, which is not allowed here",
            what
        )));
    }
    Ok(())
}

/// Convert to a plain `ArrayBuffer`.
///
/// A shared buffer only passes with `allow_shared` set.
pub fn array_buffer(value: &Value, options: &ConversionOptions) -> ConversionResult<BufferValue> {
    let buffer = value.as_buffer().ok_or_else(|| wrong_brand("ArrayBuffer"))?;
    check_realm(buffer.realm(), options, "the buffer")?;
    validate_buffer(buffer, options, "the buffer")?;
    Ok(buffer.clone())
}

/// Convert to a `SharedArrayBuffer`.
///
/// The shared brand is required; a growable shared buffer only passes with
/// `allow_resizable` set.
pub fn shared_array_buffer(
    value: &Value,
    options: &ConversionOptions,
) -> ConversionResult<BufferValue> {
    let buffer = value
        .as_buffer()
        .filter(|buf| buf.is_shared())
        .ok_or_else(|| wrong_brand("SharedArrayBuffer"))?;
    check_realm(buffer.realm(), options, "the buffer")?;
    if buffer.is_detached() {
        return Err(ConversionError::type_error("the buffer is detached"));
    }
    if buffer.is_resizable() && !options.allow_resizable {
        return Err(ConversionError::type_error(
            "the buffer is growable, which is not allowed here",
        ));
    }
    Ok(buffer.clone())
}

fn convert_view(
    expected: ViewKind,
    value: &Value,
    options: &ConversionOptions,
) -> ConversionResult<ViewValue> {
    let view = value
        .as_view()
        .filter(|view| view.kind() == expected)
        .ok_or_else(|| wrong_brand(expected.name()))?;
    check_realm(view.realm(), options, "the view")?;
    validate_buffer(view.buffer(), options, "the view's buffer")?;
    Ok(view.clone())
}

/// Convert to a `DataView`.
pub fn data_view(value: &Value, options: &ConversionOptions) -> ConversionResult<ViewValue> {
    convert_view(ViewKind::DataView, value, options)
}

/// Convert to a typed array of the given element kind.
///
/// The named conversions below are thin wrappers over this.
pub fn typed_array(
    kind: TypedArrayKind,
    value: &Value,
    options: &ConversionOptions,
) -> ConversionResult<ViewValue> {
    convert_view(ViewKind::TypedArray(kind), value, options)
}

/// Convert to an `Int8Array`.
pub fn int8_array(value: &Value, options: &ConversionOptions) -> ConversionResult<ViewValue> {
    typed_array(TypedArrayKind::Int8, value, options)
}

/// Convert to an `Int16Array`.
pub fn int16_array(value: &Value, options: &ConversionOptions) -> ConversionResult<ViewValue> {
    typed_array(TypedArrayKind::Int16, value, options)
}

/// Convert to an `Int32Array`.
pub fn int32_array(value: &Value, options: &ConversionOptions) -> ConversionResult<ViewValue> {
    typed_array(TypedArrayKind::Int32, value, options)
}

/// Convert to a `Uint8Array`.
pub fn uint8_array(value: &Value, options: &ConversionOptions) -> ConversionResult<ViewValue> {
    typed_array(TypedArrayKind::Uint8, value, options)
}

/// Convert to a `Uint16Array`.
pub fn uint16_array(value: &Value, options: &ConversionOptions) -> ConversionResult<ViewValue> {
    typed_array(TypedArrayKind::Uint16, value, options)
}

/// Convert to a `Uint32Array`.
pub fn uint32_array(value: &Value, options: &ConversionOptions) -> ConversionResult<ViewValue> {
    typed_array(TypedArrayKind::Uint32, value, options)
}

/// Convert to a `Uint8ClampedArray`.
pub fn uint8_clamped_array(
    value: &Value,
    options: &ConversionOptions,
) -> ConversionResult<ViewValue> {
    typed_array(TypedArrayKind::Uint8Clamped, value, options)
}

/// Convert to a `Float32Array`.
pub fn float32_array(value: &Value, options: &ConversionOptions) -> ConversionResult<ViewValue> {
    typed_array(TypedArrayKind::Float32, value, options)
}

/// Convert to a `Float64Array`.
pub fn float64_array(value: &Value, options: &ConversionOptions) -> ConversionResult<ViewValue> {
    typed_array(TypedArrayKind::Float64, value, options)
}

/// Convert to an `ArrayBufferView`: any view brand is accepted.
pub fn array_buffer_view(
    value: &Value,
    options: &ConversionOptions,
) -> ConversionResult<ViewValue> {
    let view = value.as_view().ok_or_else(|| {
        ConversionError::type_error("value is not a view on an ArrayBuffer object")
    })?;
    check_realm(view.realm(), options, "the view")?;
    validate_buffer(view.buffer(), options, "the view's buffer")?;
    Ok(view.clone())
}

/// Convert to a `BufferSource`: a buffer or a view on one.
pub fn buffer_source(value: &Value, options: &ConversionOptions) -> ConversionResult<Value> {
    match value {
        Value::Buffer(_) => Ok(Value::buffer(array_buffer(value, options)?)),
        Value::View(_) => Ok(Value::view(array_buffer_view(value, options)?)),
        _ => Err(ConversionError::type_error(
            "value is not an ArrayBuffer object or a view on one",
        )),
    }
}
