//! Numeric conversions: the integer family and floating-point types.
//!
//! All integer widths share one algorithm parameterized by bit length and
//! signedness. The 64-bit family performs its arithmetic in f64, so inputs
//! beyond 2^53 lose precision the way any IEEE-double host loses it; range
//! checks for those widths use the safe-integer bounds.

use core_types::{ConversionError, ConversionResult, Value};

use crate::coerce::{censor_negative_zero, even_round, integer_part, modulo, to_number};
use crate::options::ConversionOptions;

const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;
const MIN_SAFE_INTEGER: f64 = -9007199254740991.0;

/// One integer width/signedness combination.
struct IntegerType {
    name: &'static str,
    bit_length: u32,
    unsigned: bool,
}

const BYTE: IntegerType = IntegerType {
    name: "byte",
    bit_length: 8,
    unsigned: false,
};
const OCTET: IntegerType = IntegerType {
    name: "octet",
    bit_length: 8,
    unsigned: true,
};
const SHORT: IntegerType = IntegerType {
    name: "short",
    bit_length: 16,
    unsigned: false,
};
const UNSIGNED_SHORT: IntegerType = IntegerType {
    name: "unsigned short",
    bit_length: 16,
    unsigned: true,
};
const LONG: IntegerType = IntegerType {
    name: "long",
    bit_length: 32,
    unsigned: false,
};
const UNSIGNED_LONG: IntegerType = IntegerType {
    name: "unsigned long",
    bit_length: 32,
    unsigned: true,
};
const LONG_LONG: IntegerType = IntegerType {
    name: "long long",
    bit_length: 64,
    unsigned: false,
};
const UNSIGNED_LONG_LONG: IntegerType = IntegerType {
    name: "unsigned long long",
    bit_length: 64,
    unsigned: true,
};

impl IntegerType {
    /// Inclusive range enforced by `enforce_range` and `clamp`.
    ///
    /// The 64-bit widths use the safe-integer bounds: beyond them an f64
    /// cannot represent every integer, so a range check against the true
    /// 64-bit bounds would accept values it cannot faithfully return.
    fn bounds(&self) -> (f64, f64) {
        if self.bit_length == 64 {
            if self.unsigned {
                (0.0, MAX_SAFE_INTEGER)
            } else {
                (MIN_SAFE_INTEGER, MAX_SAFE_INTEGER)
            }
        } else if self.unsigned {
            (0.0, ((1u64 << self.bit_length) - 1) as f64)
        } else {
            let half = 1u64 << (self.bit_length - 1);
            (-(half as f64), (half - 1) as f64)
        }
    }

    /// The wrap modulus, 2^bitLength.
    fn modulus(&self) -> f64 {
        if self.bit_length == 64 {
            2f64.powi(64)
        } else {
            (1u64 << self.bit_length) as f64
        }
    }
}

/// The shared integer conversion algorithm.
fn convert_integer(
    value: &Value,
    options: &ConversionOptions,
    ty: &IntegerType,
) -> ConversionResult<f64> {
    let (lower, upper) = ty.bounds();
    let mut x = censor_negative_zero(to_number(value)?);

    if options.enforce_range {
        if !x.is_finite() {
            return Err(ConversionError::type_error(format!(
                "value is not a finite number for {}",
                ty.name
            )));
        }
        x = integer_part(x);
        if x < lower || x > upper {
            return Err(ConversionError::type_error(format!(
                "value is outside the accepted range of {} to {} for {}",
                lower, upper, ty.name
            )));
        }
        return Ok(x);
    }

    if !x.is_nan() && options.clamp {
        x = even_round(x);
        return Ok(censor_negative_zero(x.clamp(lower, upper)));
    }

    if !x.is_finite() || x == 0.0 {
        return Ok(0.0);
    }

    x = integer_part(x);
    if x >= lower && x <= upper {
        return Ok(x);
    }

    let modulus = ty.modulus();
    // modulo of an exact multiple yields -0 for negative input
    x = censor_negative_zero(modulo(x, modulus));
    if !ty.unsigned && x >= modulus / 2.0 {
        x -= modulus;
    }
    Ok(x)
}

/// Convert to an 8-bit signed integer (`byte`).
pub fn byte(value: &Value, options: &ConversionOptions) -> ConversionResult<i8> {
    Ok(convert_integer(value, options, &BYTE)? as i8)
}

/// Convert to an 8-bit unsigned integer (`octet`).
pub fn octet(value: &Value, options: &ConversionOptions) -> ConversionResult<u8> {
    Ok(convert_integer(value, options, &OCTET)? as u8)
}

/// Convert to a 16-bit signed integer (`short`).
pub fn short(value: &Value, options: &ConversionOptions) -> ConversionResult<i16> {
    Ok(convert_integer(value, options, &SHORT)? as i16)
}

/// Convert to a 16-bit unsigned integer (`unsigned short`).
pub fn unsigned_short(value: &Value, options: &ConversionOptions) -> ConversionResult<u16> {
    Ok(convert_integer(value, options, &UNSIGNED_SHORT)? as u16)
}

/// Convert to a 32-bit signed integer (`long`).
pub fn long(value: &Value, options: &ConversionOptions) -> ConversionResult<i32> {
    Ok(convert_integer(value, options, &LONG)? as i32)
}

/// Convert to a 32-bit unsigned integer (`unsigned long`).
pub fn unsigned_long(value: &Value, options: &ConversionOptions) -> ConversionResult<u32> {
    Ok(convert_integer(value, options, &UNSIGNED_LONG)? as u32)
}

/// Convert to the 64-bit signed range (`long long`).
///
/// The result is an f64: values of magnitude beyond 2^53 are the closest
/// representable double, not an exact 64-bit integer. The conversion
/// carries the precision of an IEEE-double host, an inherent limitation of
/// coercing through ToNumber.
pub fn long_long(value: &Value, options: &ConversionOptions) -> ConversionResult<f64> {
    convert_integer(value, options, &LONG_LONG)
}

/// Convert to the 64-bit unsigned range (`unsigned long long`).
///
/// Same precision limitation as [`long_long`].
pub fn unsigned_long_long(value: &Value, options: &ConversionOptions) -> ConversionResult<f64> {
    convert_integer(value, options, &UNSIGNED_LONG_LONG)
}

/// Convert to a finite double (`double`).
pub fn double(value: &Value) -> ConversionResult<f64> {
    let x = to_number(value)?;
    if !x.is_finite() {
        return Err(ConversionError::type_error(
            "value is not a finite floating-point value",
        ));
    }
    Ok(x)
}

/// Convert to a double, NaN and infinities allowed (`unrestricted double`).
pub fn unrestricted_double(value: &Value) -> ConversionResult<f64> {
    to_number(value)
}

/// Convert to a finite single-precision float (`float`).
///
/// The value is rounded to the nearest binary32 (ties to even, negative
/// zero preserved); rounding that overflows to infinity is rejected.
pub fn float(value: &Value) -> ConversionResult<f32> {
    let x = to_number(value)?;
    if !x.is_finite() {
        return Err(ConversionError::type_error(
            "value is not a finite floating-point value",
        ));
    }
    let y = x as f32;
    if y.is_infinite() {
        return Err(ConversionError::type_error(
            "value is outside the range of a single-precision floating-point value",
        ));
    }
    Ok(y)
}

/// Convert to a single-precision float, NaN and infinities allowed
/// (`unrestricted float`).
pub fn unrestricted_float(value: &Value) -> ConversionResult<f32> {
    Ok(to_number(value)? as f32)
}
