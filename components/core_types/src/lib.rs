//! Core value types and error handling for the WebIDL conversion layer.
//!
//! This crate provides the foundational types the conversion functions
//! operate on: the tagged value representation, UTF-16 string sequences,
//! buffer/view metadata, realm identity, and the conversion failure type.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of host values
//! - [`JsString`] - A sequence of UTF-16 code units
//! - [`BufferValue`] / [`ViewValue`] - Binary buffers and views on them
//! - [`RealmId`] - Execution realm identity used by brand checks
//! - [`ConversionError`] - Conversion failure with an error kind
//!
//! # Examples
//!
//! ```
//! use core_types::{Class, Value};
//!
//! let num = Value::number(42.0);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_of(), "number");
//! assert_eq!(num.classify(), Class::Number);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod buffer;
mod error;
mod realm;
mod string;
mod value;

pub use buffer::{BufferValue, TypedArrayKind, ViewKind, ViewValue};
pub use error::{ConversionError, ConversionResult, ErrorKind, ErrorValue};
pub use realm::RealmId;
pub use string::JsString;
pub use value::{BigIntValue, Class, FunctionKind, FunctionValue, ObjectData, SymbolValue, Value};
