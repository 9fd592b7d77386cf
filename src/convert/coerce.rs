//! Strict base-unit integer coercion.

use num_bigint::{BigInt, Sign};
use num_traits::FromPrimitive;

use super::parse::{digits_to_biguint, is_digits, split_sign};
use crate::domain::AmountInput;
use crate::error::{AmountError, Result};
use crate::math::MAX_SAFE_INTEGER;

/// Coerces a base-unit value to an exact integer.
///
/// Anything ambiguous is rejected rather than guessed at: doubles must be
/// finite, integral and within `±(2^53 - 1)`; text must be `[+-]digits`
/// once surrounding whitespace is trimmed.
///
/// # Errors
///
/// - [`AmountError::InvalidInteger`] for fractional or non-finite doubles
///   and for text that is not a plain integer.
/// - [`AmountError::UnsafeNumber`] for doubles beyond the exact-integer
///   range.
pub(crate) fn coerce_integer(value: &AmountInput) -> Result<BigInt> {
    match value {
        AmountInput::Big(v) => Ok(v.clone()),
        AmountInput::Int(v) => Ok(BigInt::from(*v)),
        AmountInput::Float(v) => coerce_float(*v),
        AmountInput::Text(s) => coerce_text(s),
    }
}

fn coerce_float(value: f64) -> Result<BigInt> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(AmountError::InvalidInteger(format!(
            "{value} is not an integer"
        )));
    }
    if value.abs() > MAX_SAFE_INTEGER {
        return Err(AmountError::UnsafeNumber(format!(
            "{value} is outside the exact integer range of a double"
        )));
    }
    BigInt::from_f64(value)
        .ok_or_else(|| AmountError::InvalidInteger(format!("{value} is not an integer")))
}

fn coerce_text(text: &str) -> Result<BigInt> {
    let trimmed = text.trim();
    let (negative, digits) = split_sign(trimmed);
    if !is_digits(digits) {
        return Err(AmountError::InvalidInteger(format!(
            "'{text}' is not an integer"
        )));
    }
    let magnitude = digits_to_biguint(digits)
        .map_err(|_| AmountError::InvalidInteger(format!("'{text}' is not an integer")))?;
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(BigInt::from_biguint(sign, magnitude))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind_of(value: AmountInput) -> ErrorKind {
        let Err(e) = coerce_integer(&value) else {
            panic!("expected {value:?} to be rejected");
        };
        e.kind()
    }

    #[test]
    fn big_passes_unchanged() {
        let Some(big) = BigInt::parse_bytes(b"-123456789012345678901234567890", 10) else {
            panic!("valid digits");
        };
        assert_eq!(coerce_integer(&AmountInput::Big(big.clone())), Ok(big));
    }

    #[test]
    fn machine_integer_passes() {
        assert_eq!(
            coerce_integer(&AmountInput::Int(i128::MIN)),
            Ok(BigInt::from(i128::MIN))
        );
    }

    #[test]
    fn integral_float_passes() {
        assert_eq!(coerce_integer(&AmountInput::Float(1500.0)), Ok(BigInt::from(1500)));
        assert_eq!(coerce_integer(&AmountInput::Float(-0.0)), Ok(BigInt::from(0)));
        assert_eq!(
            coerce_integer(&AmountInput::Float(MAX_SAFE_INTEGER)),
            Ok(BigInt::from(9_007_199_254_740_991_i64))
        );
    }

    #[test]
    fn fractional_float_is_invalid_integer() {
        assert_eq!(kind_of(AmountInput::Float(1.5)), ErrorKind::InvalidInteger);
        assert_eq!(kind_of(AmountInput::Float(f64::NAN)), ErrorKind::InvalidInteger);
        assert_eq!(
            kind_of(AmountInput::Float(f64::INFINITY)),
            ErrorKind::InvalidInteger
        );
    }

    #[test]
    fn oversized_float_is_unsafe() {
        assert_eq!(kind_of(AmountInput::Float(1e16)), ErrorKind::UnsafeNumber);
        assert_eq!(
            kind_of(AmountInput::Float(-9_007_199_254_740_992.0)),
            ErrorKind::UnsafeNumber
        );
    }

    #[test]
    fn integer_text_passes() {
        assert_eq!(coerce_integer(&AmountInput::from("-101")), Ok(BigInt::from(-101)));
        assert_eq!(coerce_integer(&AmountInput::from(" +42 ")), Ok(BigInt::from(42)));
        assert_eq!(coerce_integer(&AmountInput::from("007")), Ok(BigInt::from(7)));
    }

    #[test]
    fn non_integer_text_is_rejected() {
        for text in ["1.5", "", "-", "1_000", "1e3", "abc", "1.0", "--1"] {
            assert_eq!(kind_of(AmountInput::from(text)), ErrorKind::InvalidInteger);
        }
    }
}
