//! Shared abstract operations: numeric and string coercion.
//!
//! These are the ToNumber / ToPrimitive / String() equivalents every typed
//! conversion builds on, plus the small numeric helpers (sign, mathematical
//! modulo, round half to even, negative-zero censoring).

use core_types::{Class, ConversionError, ConversionResult, JsString, Value};

/// The preferred primitive type when coercing an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrimitiveHint {
    /// Prefer the `valueOf` result.
    Number,
    /// Prefer the `toString` result.
    String,
}

/// Coerce a value to a number (ToNumber).
///
/// Symbols and big integers cannot be coerced and fail with a type error;
/// everything else produces a number, with unparseable strings yielding NaN.
pub fn to_number(value: &Value) -> ConversionResult<f64> {
    match value {
        Value::Undefined => Ok(f64::NAN),
        Value::Null => Ok(0.0),
        Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => Ok(*n),
        Value::String(s) => Ok(parse_numeric(s)),
        Value::Symbol(_) => Err(ConversionError::type_error(
            "value is a symbol, which cannot be converted to a number",
        )),
        Value::BigInt(_) => Err(ConversionError::type_error(
            "value is a big integer, which cannot be converted to a number",
        )),
        _ => {
            let primitive = to_primitive(value, PrimitiveHint::Number);
            to_number(&primitive)
        }
    }
}

/// Coerce a value to a string (the String() operation).
///
/// Symbols fail with a type error. Existing strings pass through with their
/// code units intact, unpaired surrogates included.
pub fn to_string_value(value: &Value) -> ConversionResult<JsString> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Symbol(_) => Err(ConversionError::type_error(
            "value is a symbol, which cannot be converted to a string",
        )),
        v if v.classify() == Class::Object => {
            let primitive = to_primitive(v, PrimitiveHint::String);
            to_string_value(&primitive)
        }
        v => Ok(JsString::from(v.to_string())),
    }
}

/// Coerce an object-family value to a primitive.
///
/// Plain objects consult their observable `valueOf`/`toString` data in hint
/// order; other object-like values fall back to their default string form.
/// Primitives are returned unchanged.
pub(crate) fn to_primitive(value: &Value, hint: PrimitiveHint) -> Value {
    match value {
        Value::Object(data) => {
            let value_of = data
                .value_of()
                .filter(|v| v.classify() != Class::Object)
                .cloned();
            let to_string = data
                .to_string_override()
                .map(|s| Value::String(s.clone()));
            let picked = match hint {
                PrimitiveHint::Number => value_of.or(to_string),
                PrimitiveHint::String => to_string.or(value_of),
            };
            picked.unwrap_or_else(|| Value::string(data.default_tag()))
        }
        Value::Function(_) | Value::Error(_) | Value::Buffer(_) | Value::View(_) => {
            Value::string(value.to_string())
        }
        _ => value.clone(),
    }
}

/// Parse a string per the numeric-literal grammar.
///
/// Whitespace-only input is zero; `Infinity` with optional sign, and
/// unsigned `0x`/`0o`/`0b` radix literals are recognized; anything else
/// must be a decimal literal or the result is NaN.
fn parse_numeric(s: &JsString) -> f64 {
    // An ill-formed string renders with U+FFFD, which fails the grammar
    // below and yields NaN, same as the host.
    let text = s.to_utf8_lossy();
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');

    if trimmed.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if body == "Infinity" {
        return sign * f64::INFINITY;
    }

    if is_decimal_literal(body) {
        sign * body.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Fold unsigned radix digits into a number; empty or malformed is NaN.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    acc
}

/// Whether `s` matches the unsigned decimal-literal grammar:
/// digits [`.` digits] [exponent] or `.` digits [exponent].
///
/// Deliberately narrower than Rust's float grammar: no `inf`, no `NaN`,
/// no underscores.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let n = bytes.len();
    let mut i = 0;
    let mut saw_digit = false;

    while i < n && bytes[i].is_ascii_digit() {
        i += 1;
        saw_digit = true;
    }
    if i < n && bytes[i] == b'.' {
        i += 1;
        while i < n && bytes[i].is_ascii_digit() {
            i += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return false;
    }
    if i < n && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < n && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < n && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == n
}

/// Sign of a number: -1 for negatives, 1 otherwise (zeros and NaN included).
pub(crate) fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Mathematical modulo: the result has the sign of the divisor.
pub(crate) fn modulo(x: f64, y: f64) -> f64 {
    let rem = x % y;
    if sign(rem) != sign(y) && rem != 0.0 {
        rem + y
    } else {
        rem
    }
}

/// Round to the nearest integer, ties toward the even neighbor; -0 becomes 0.
pub(crate) fn even_round(x: f64) -> f64 {
    censor_negative_zero(x.round_ties_even())
}

/// Truncate toward zero; -0 becomes 0.
pub(crate) fn integer_part(x: f64) -> f64 {
    censor_negative_zero(x.trunc())
}

/// Normalize negative zero to positive zero.
pub(crate) fn censor_negative_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}
