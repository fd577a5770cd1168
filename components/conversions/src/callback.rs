//! Callback-function conversions.
//!
//! `Function` and `VoidFunction` share one validation routine: the input's
//! runtime classification must be "function". Ordinary, arrow, generator,
//! async and async-generator functions are all accepted uniformly.

use core_types::{ConversionError, ConversionResult, Value};

fn convert_callback_function(value: &Value) -> ConversionResult<Value> {
    if !value.is_function() {
        return Err(ConversionError::type_error("value is not a function"));
    }
    Ok(value.clone())
}

/// Convert to a `Function` callback.
pub fn function(value: &Value) -> ConversionResult<Value> {
    convert_callback_function(value)
}

/// Convert to a `VoidFunction` callback.
pub fn void_function(value: &Value) -> ConversionResult<Value> {
    convert_callback_function(value)
}
