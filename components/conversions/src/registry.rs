//! The conversion registry.
//!
//! Each supported WebIDL type name is a variant of [`IdlType`], a
//! compile-time enumerable mapping from name to conversion function that
//! replaces stringly-typed dispatch. [`convert`] is the uniform entry
//! point; the typed functions in the sibling modules remain the primary
//! API when the target type is known statically.

use std::fmt;

use core_types::{ConversionResult, Value};

use crate::options::ConversionOptions;
use crate::{buffer_source, callback, number, object, string};

/// A WebIDL type with a registered conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdlType {
    /// `any`
    Any,
    /// `undefined` (legacy name: `void`)
    Undefined,
    /// `boolean`
    Boolean,
    /// `byte`
    Byte,
    /// `octet`
    Octet,
    /// `short`
    Short,
    /// `unsigned short`
    UnsignedShort,
    /// `long`
    Long,
    /// `unsigned long`
    UnsignedLong,
    /// `long long`
    LongLong,
    /// `unsigned long long`
    UnsignedLongLong,
    /// `double`
    Double,
    /// `unrestricted double`
    UnrestrictedDouble,
    /// `float`
    Float,
    /// `unrestricted float`
    UnrestrictedFloat,
    /// `DOMString`
    DomString,
    /// `ByteString`
    ByteString,
    /// `USVString`
    UsvString,
    /// `object`
    Object,
    /// `Error`
    Error,
    /// `DOMTimeStamp`, a pure alias of `unsigned long long`
    DomTimeStamp,
    /// `Function`
    Function,
    /// `VoidFunction`
    VoidFunction,
    /// `ArrayBuffer`
    ArrayBuffer,
    /// `SharedArrayBuffer`
    SharedArrayBuffer,
    /// `DataView`
    DataView,
    /// `Int8Array`
    Int8Array,
    /// `Int16Array`
    Int16Array,
    /// `Int32Array`
    Int32Array,
    /// `Uint8Array`
    Uint8Array,
    /// `Uint16Array`
    Uint16Array,
    /// `Uint32Array`
    Uint32Array,
    /// `Uint8ClampedArray`
    Uint8ClampedArray,
    /// `Float32Array`
    Float32Array,
    /// `Float64Array`
    Float64Array,
    /// `ArrayBufferView`
    ArrayBufferView,
    /// `BufferSource`
    BufferSource,
}

impl IdlType {
    /// Every registered type, in registration order.
    pub const ALL: [IdlType; 37] = [
        IdlType::Any,
        IdlType::Undefined,
        IdlType::Boolean,
        IdlType::Byte,
        IdlType::Octet,
        IdlType::Short,
        IdlType::UnsignedShort,
        IdlType::Long,
        IdlType::UnsignedLong,
        IdlType::LongLong,
        IdlType::UnsignedLongLong,
        IdlType::Double,
        IdlType::UnrestrictedDouble,
        IdlType::Float,
        IdlType::UnrestrictedFloat,
        IdlType::DomString,
        IdlType::ByteString,
        IdlType::UsvString,
        IdlType::Object,
        IdlType::Error,
        IdlType::DomTimeStamp,
        IdlType::Function,
        IdlType::VoidFunction,
        IdlType::ArrayBuffer,
        IdlType::SharedArrayBuffer,
        IdlType::DataView,
        IdlType::Int8Array,
        IdlType::Int16Array,
        IdlType::Int32Array,
        IdlType::Uint8Array,
        IdlType::Uint16Array,
        IdlType::Uint32Array,
        IdlType::Uint8ClampedArray,
        IdlType::Float32Array,
        IdlType::Float64Array,
        IdlType::ArrayBufferView,
        IdlType::BufferSource,
    ];

    /// The WebIDL spelling of this type name.
    pub fn name(self) -> &'static str {
        match self {
            IdlType::Any => "any",
            IdlType::Undefined => "undefined",
            IdlType::Boolean => "boolean",
            IdlType::Byte => "byte",
            IdlType::Octet => "octet",
            IdlType::Short => "short",
            IdlType::UnsignedShort => "unsigned short",
            IdlType::Long => "long",
            IdlType::UnsignedLong => "unsigned long",
            IdlType::LongLong => "long long",
            IdlType::UnsignedLongLong => "unsigned long long",
            IdlType::Double => "double",
            IdlType::UnrestrictedDouble => "unrestricted double",
            IdlType::Float => "float",
            IdlType::UnrestrictedFloat => "unrestricted float",
            IdlType::DomString => "DOMString",
            IdlType::ByteString => "ByteString",
            IdlType::UsvString => "USVString",
            IdlType::Object => "object",
            IdlType::Error => "Error",
            IdlType::DomTimeStamp => "DOMTimeStamp",
            IdlType::Function => "Function",
            IdlType::VoidFunction => "VoidFunction",
            IdlType::ArrayBuffer => "ArrayBuffer",
            IdlType::SharedArrayBuffer => "SharedArrayBuffer",
            IdlType::DataView => "DataView",
            IdlType::Int8Array => "Int8Array",
            IdlType::Int16Array => "Int16Array",
            IdlType::Int32Array => "Int32Array",
            IdlType::Uint8Array => "Uint8Array",
            IdlType::Uint16Array => "Uint16Array",
            IdlType::Uint32Array => "Uint32Array",
            IdlType::Uint8ClampedArray => "Uint8ClampedArray",
            IdlType::Float32Array => "Float32Array",
            IdlType::Float64Array => "Float64Array",
            IdlType::ArrayBufferView => "ArrayBufferView",
            IdlType::BufferSource => "BufferSource",
        }
    }

    /// Look up a type by its exact WebIDL spelling.
    ///
    /// The legacy `void` spelling resolves to [`IdlType::Undefined`].
    pub fn from_name(name: &str) -> Option<IdlType> {
        if name == "void" {
            return Some(IdlType::Undefined);
        }
        IdlType::ALL.into_iter().find(|ty| ty.name() == name)
    }
}

impl fmt::Display for IdlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Convert `value` to the given WebIDL type.
///
/// Numeric results come back as `Number` values, strings as `String`
/// values; passthrough and brand-checked conversions return the input
/// value itself (identity preserved through the clone).
pub fn convert(
    ty: IdlType,
    value: &Value,
    options: &ConversionOptions,
) -> ConversionResult<Value> {
    match ty {
        IdlType::Any => object::any(value),
        IdlType::Undefined => object::undefined(value),
        IdlType::Boolean => Ok(Value::boolean(object::boolean(value)?)),
        IdlType::Byte => Ok(Value::number(number::byte(value, options)? as f64)),
        IdlType::Octet => Ok(Value::number(number::octet(value, options)? as f64)),
        IdlType::Short => Ok(Value::number(number::short(value, options)? as f64)),
        IdlType::UnsignedShort => {
            Ok(Value::number(number::unsigned_short(value, options)? as f64))
        }
        IdlType::Long => Ok(Value::number(number::long(value, options)? as f64)),
        IdlType::UnsignedLong => Ok(Value::number(number::unsigned_long(value, options)? as f64)),
        IdlType::LongLong => Ok(Value::number(number::long_long(value, options)?)),
        IdlType::UnsignedLongLong | IdlType::DomTimeStamp => {
            Ok(Value::number(number::unsigned_long_long(value, options)?))
        }
        IdlType::Double => Ok(Value::number(number::double(value)?)),
        IdlType::UnrestrictedDouble => Ok(Value::number(number::unrestricted_double(value)?)),
        IdlType::Float => Ok(Value::number(number::float(value)? as f64)),
        IdlType::UnrestrictedFloat => {
            Ok(Value::number(number::unrestricted_float(value)? as f64))
        }
        IdlType::DomString => Ok(Value::String(string::dom_string(value, options)?)),
        IdlType::ByteString => Ok(Value::String(string::byte_string(value)?)),
        IdlType::UsvString => Ok(Value::String(string::usv_string(value)?)),
        IdlType::Object => object::object(value),
        IdlType::Error => object::error(value, options),
        IdlType::Function => callback::function(value),
        IdlType::VoidFunction => callback::void_function(value),
        IdlType::ArrayBuffer => Ok(Value::buffer(buffer_source::array_buffer(value, options)?)),
        IdlType::SharedArrayBuffer => Ok(Value::buffer(buffer_source::shared_array_buffer(
            value, options,
        )?)),
        IdlType::DataView => Ok(Value::view(buffer_source::data_view(value, options)?)),
        IdlType::Int8Array => Ok(Value::view(buffer_source::int8_array(value, options)?)),
        IdlType::Int16Array => Ok(Value::view(buffer_source::int16_array(value, options)?)),
        IdlType::Int32Array => Ok(Value::view(buffer_source::int32_array(value, options)?)),
        IdlType::Uint8Array => Ok(Value::view(buffer_source::uint8_array(value, options)?)),
        IdlType::Uint16Array => Ok(Value::view(buffer_source::uint16_array(value, options)?)),
        IdlType::Uint32Array => Ok(Value::view(buffer_source::uint32_array(value, options)?)),
        IdlType::Uint8ClampedArray => Ok(Value::view(buffer_source::uint8_clamped_array(
            value, options,
        )?)),
        IdlType::Float32Array => Ok(Value::view(buffer_source::float32_array(value, options)?)),
        IdlType::Float64Array => Ok(Value::view(buffer_source::float64_array(value, options)?)),
        IdlType::ArrayBufferView => Ok(Value::view(buffer_source::array_buffer_view(
            value, options,
        )?)),
        IdlType::BufferSource => buffer_source::buffer_source(value, options),
    }
}
