//! Universal, boolean, object and error-object conversions.

use core_types::{Class, ConversionError, ConversionResult, Value};

use crate::options::{check_realm, ConversionOptions};

/// The universal passthrough (`any`): returns the input unchanged.
pub fn any(value: &Value) -> ConversionResult<Value> {
    Ok(value.clone())
}

/// The `undefined` conversion (legacy name `void`): ignores the input.
pub fn undefined(_value: &Value) -> ConversionResult<Value> {
    Ok(Value::Undefined)
}

/// Convert to a `boolean` (ToBoolean; never fails).
pub fn boolean(value: &Value) -> ConversionResult<bool> {
    Ok(value.is_truthy())
}

/// Convert to an `object`.
///
/// Accepts anything whose runtime classification is Object, callables and
/// exotic objects included.
pub fn object(value: &Value) -> ConversionResult<Value> {
    if value.classify() != Class::Object {
        return Err(ConversionError::type_error("value is not an object"));
    }
    Ok(value.clone())
}

/// Convert to an `Error` object.
///
/// Brand-checked: the input must be a genuine error object from the realm
/// the identity policy names.
pub fn error(value: &Value, options: &ConversionOptions) -> ConversionResult<Value> {
    match value {
        Value::Error(err) => {
            check_realm(err.realm(), options, "the Error object")?;
            Ok(value.clone())
        }
        _ => Err(ConversionError::type_error("value is not an Error object")),
    }
}
