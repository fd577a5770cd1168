//! String conversions: `DOMString`, `ByteString` and `USVString`.

use core_types::{ConversionError, ConversionResult, JsString, Value};

use crate::coerce::to_string_value;
use crate::options::ConversionOptions;

/// Convert to a `DOMString`.
///
/// Symbols are rejected; with `treat_null_as_empty_string` a null input
/// becomes the empty string before stringification. Unpaired surrogate code
/// units pass through unchanged.
pub fn dom_string(value: &Value, options: &ConversionOptions) -> ConversionResult<JsString> {
    if options.treat_null_as_empty_string && value.is_null() {
        return Ok(JsString::new());
    }
    to_string_value(value)
}

/// Convert to a `ByteString`.
///
/// Fails if any code unit exceeds 255; surrogates always do, so every
/// non-Latin-1 string is rejected.
pub fn byte_string(value: &Value) -> ConversionResult<JsString> {
    let s = to_string_value(value)?;
    if s.code_units().iter().any(|&c| c > 255) {
        return Err(ConversionError::type_error("value is not a valid byte string"));
    }
    Ok(s)
}

/// Convert to a `USVString`.
///
/// The coerced string is scanned pairwise; every unpaired or inverted
/// surrogate code unit is replaced with U+FFFD, so the result contains only
/// Unicode scalar values.
pub fn usv_string(value: &Value) -> ConversionResult<JsString> {
    let s = to_string_value(value)?;
    Ok(replace_unpaired_surrogates(&s))
}

fn replace_unpaired_surrogates(s: &JsString) -> JsString {
    const REPLACEMENT: u16 = 0xFFFD;

    let units = s.code_units();
    let n = units.len();
    let mut out = Vec::with_capacity(n);
    let mut i = 0;

    while i < n {
        let c = units[i];
        if !(0xD800..=0xDFFF).contains(&c) {
            out.push(c);
        } else if (0xDC00..=0xDFFF).contains(&c) {
            // low surrogate with no preceding high surrogate
            out.push(REPLACEMENT);
        } else if i == n - 1 {
            // high surrogate at the end of the string
            out.push(REPLACEMENT);
        } else {
            let d = units[i + 1];
            if (0xDC00..=0xDFFF).contains(&d) {
                out.push(c);
                out.push(d);
                i += 1;
            } else {
                out.push(REPLACEMENT);
            }
        }
        i += 1;
    }

    JsString::from_code_units(out)
}
