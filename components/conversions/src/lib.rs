//! WebIDL type-conversion algorithms.
//!
//! This crate implements the WebIDL specification's type conversions: a
//! fixed set of pure functions that coerce an arbitrary host [`Value`] into
//! a value conforming to a specific WebIDL type. Consumers are
//! binding-generation layers converting host values into typed values
//! before passing them to native APIs.
//!
//! Every conversion is stateless and synchronous; a call either produces
//! the converted value or a single [`core_types::ConversionError`]. The
//! optional [`ConversionOptions`] carries the per-call flags (`[Clamp]`,
//! `[EnforceRange]`, `[AllowShared]`, ...) and the realm identity policy
//! for brand checks.
//!
//! # Example
//!
//! ```
//! use conversions::{convert, ConversionOptions, IdlType};
//! use core_types::Value;
//!
//! let opts = ConversionOptions::default();
//!
//! // byte wraps modulo 2^8
//! let wrapped = convert(IdlType::Byte, &Value::number(128.0), &opts).unwrap();
//! assert_eq!(wrapped, Value::number(-128.0));
//!
//! // with [Clamp] it saturates instead
//! let clamped = conversions::number::byte(
//!     &Value::number(128.0),
//!     &ConversionOptions { clamp: true, ..Default::default() },
//! )
//! .unwrap();
//! assert_eq!(clamped, 127);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod buffer_source;
pub mod callback;
pub mod coerce;
pub mod number;
pub mod object;
pub mod options;
pub mod registry;
pub mod string;

pub use coerce::{to_number, to_string_value};
pub use options::ConversionOptions;
pub use registry::{convert, IdlType};

// Re-export the value model so callers need only this crate.
pub use core_types::{
    BufferValue, Class, ConversionError, ConversionResult, ErrorKind, ErrorValue, JsString,
    RealmId, TypedArrayKind, Value, ViewKind, ViewValue,
};
