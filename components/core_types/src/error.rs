//! Error kinds, error object values, and the conversion failure type.

use std::fmt;

use thiserror::Error;

use crate::realm::RealmId;

/// The kind of a host error.
///
/// These correspond to the built-in error constructors. The kind doubles as
/// the brand of an error object value and as the classification of a
/// conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic Error
    Error,
    /// TypeError - type mismatch errors
    TypeError,
    /// ReferenceError - undefined variable access
    ReferenceError,
    /// SyntaxError - parse/syntax errors
    SyntaxError,
    /// RangeError - numeric range violations
    RangeError,
    /// URIError - malformed URI
    URIError,
    /// EvalError - eval failures (legacy)
    EvalError,
}

impl ErrorKind {
    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::URIError => "URIError",
            ErrorKind::EvalError => "EvalError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An error object value.
///
/// This is a *value* that can flow through conversions (the `Error` type
/// brand-checks for it), not a failure of the conversion layer itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorValue {
    kind: ErrorKind,
    message: String,
    realm: RealmId,
}

impl ErrorValue {
    /// Create an error object value in the default realm.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ErrorValue {
            kind,
            message: message.into(),
            realm: RealmId::default(),
        }
    }

    /// Move the value into the given realm.
    pub fn in_realm(mut self, realm: RealmId) -> Self {
        self.realm = realm;
        self
    }

    /// The error kind brand.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The realm that created this value.
    pub fn realm(&self) -> RealmId {
        self.realm
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

/// Failure signaled by a conversion function.
///
/// Every failure is synchronous and surfaced directly to the caller; the
/// message names the violated constraint.
///
/// # Examples
///
/// ```
/// use core_types::{ConversionError, ErrorKind};
///
/// let err = ConversionError::type_error("value is not an object");
/// assert_eq!(err.kind, ErrorKind::TypeError);
/// assert_eq!(err.to_string(), "TypeError: value is not an object");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ConversionError {
    /// The error constructor this failure corresponds to.
    pub kind: ErrorKind,
    /// Human-readable description of the violated constraint.
    pub message: String,
}

impl ConversionError {
    /// Create a TypeError failure.
    pub fn type_error(message: impl Into<String>) -> Self {
        ConversionError {
            kind: ErrorKind::TypeError,
            message: message.into(),
        }
    }

    /// Create a RangeError failure.
    pub fn range_error(message: impl Into<String>) -> Self {
        ConversionError {
            kind: ErrorKind::RangeError,
            message: message.into(),
        }
    }
}

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;
