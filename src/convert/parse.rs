//! Decimal text normalization and parsing.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::domain::AmountInput;
use crate::error::{AmountError, Result};

/// A validated `[+-]digits[.digits]` decimal split into its parts.
///
/// `integer` has its leading zeros stripped (a lone `"0"` is kept);
/// `fraction` is kept verbatim, trailing zeros included, because rounding
/// depends on every digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedDecimal<'a> {
    pub(crate) negative: bool,
    pub(crate) integer: &'a str,
    pub(crate) fraction: &'a str,
}

/// Turns any accepted input shape into plain decimal text.
///
/// Doubles go through the shortest round-trip rendering, which never uses
/// exponent notation. Text is trimmed and stripped of `_` separators.
pub(crate) fn normalize(value: &AmountInput) -> Result<String> {
    match value {
        AmountInput::Big(v) => Ok(v.to_string()),
        AmountInput::Int(v) => Ok(v.to_string()),
        AmountInput::Float(v) if v.is_finite() => Ok(v.to_string()),
        AmountInput::Float(v) => Err(AmountError::InvalidDecimal(format!(
            "{v} is not a finite number"
        ))),
        AmountInput::Text(s) => Ok(s.trim().replace('_', "")),
    }
}

/// Splits a leading `+` or `-` off `text`.
pub(crate) fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

pub(crate) fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parses normalized decimal text.
///
/// # Errors
///
/// Returns [`AmountError::InvalidDecimal`] unless `text` matches
/// `[+-]digits[.digits]`.
pub(crate) fn parse_decimal(text: &str) -> Result<ParsedDecimal<'_>> {
    let (negative, unsigned) = split_sign(text);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    if !is_digits(integer) || fraction.is_some_and(|f| !is_digits(f)) {
        return Err(AmountError::InvalidDecimal(format!(
            "'{text}' is not a decimal number"
        )));
    }
    let fraction = fraction.unwrap_or_default();

    let stripped = integer.trim_start_matches('0');
    let integer = if stripped.is_empty() { "0" } else { stripped };

    Ok(ParsedDecimal {
        negative,
        integer,
        fraction,
    })
}

/// Parses a run of ASCII digits; the empty run is zero.
pub(crate) fn digits_to_biguint(digits: &str) -> Result<BigUint> {
    if digits.is_empty() {
        return Ok(BigUint::zero());
    }
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| AmountError::InvalidDecimal(format!("'{digits}' is not a digit run")))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use num_bigint::BigInt;

    fn parsed(text: &str) -> ParsedDecimal<'_> {
        let Ok(p) = parse_decimal(text) else {
            panic!("expected '{text}' to parse");
        };
        p
    }

    #[test]
    fn normalize_shapes() {
        assert_eq!(normalize(&AmountInput::Int(-42)).ok().as_deref(), Some("-42"));
        assert_eq!(
            normalize(&AmountInput::Big(BigInt::from(7))).ok().as_deref(),
            Some("7")
        );
        assert_eq!(
            normalize(&AmountInput::Text("  1_000.5 ".into())).ok().as_deref(),
            Some("1000.5")
        );
    }

    #[test]
    fn normalize_float_avoids_exponent() {
        let text = |v: f64| normalize(&AmountInput::Float(v)).ok();
        assert_eq!(text(1e21).as_deref(), Some("1000000000000000000000"));
        assert_eq!(text(1e-7).as_deref(), Some("0.0000001"));
        assert_eq!(text(0.1).as_deref(), Some("0.1"));
        assert_eq!(text(-2.5).as_deref(), Some("-2.5"));
    }

    #[test]
    fn normalize_rejects_non_finite() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let Err(e) = normalize(&AmountInput::Float(v)) else {
                panic!("expected Err for {v}");
            };
            assert_eq!(e.kind(), ErrorKind::InvalidDecimal);
        }
    }

    #[test]
    fn parse_plain_integer() {
        let p = parsed("123");
        assert!(!p.negative);
        assert_eq!(p.integer, "123");
        assert_eq!(p.fraction, "");
    }

    #[test]
    fn parse_signed_decimal() {
        let p = parsed("-1.005");
        assert!(p.negative);
        assert_eq!(p.integer, "1");
        assert_eq!(p.fraction, "005");

        let p = parsed("+2.50");
        assert!(!p.negative);
        assert_eq!(p.fraction, "50");
    }

    #[test]
    fn parse_strips_leading_zeros() {
        assert_eq!(parsed("000123.4").integer, "123");
        assert_eq!(parsed("0000").integer, "0");
        assert_eq!(parsed("0.5").integer, "0");
    }

    #[test]
    fn parse_rejects_malformed() {
        let cases = [
            "", "-", "+", ".", ".5", "5.", "12a.3", "1.2.3", "1e5", "--1", " 1", "1,000", "0x10",
        ];
        for text in cases {
            let Err(e) = parse_decimal(text) else {
                panic!("expected '{text}' to be rejected");
            };
            assert_eq!(e.kind(), ErrorKind::InvalidDecimal);
        }
    }

    #[test]
    fn split_sign_variants() {
        assert_eq!(split_sign("-5"), (true, "5"));
        assert_eq!(split_sign("+5"), (false, "5"));
        assert_eq!(split_sign("5"), (false, "5"));
    }

    #[test]
    fn digits_to_biguint_empty_is_zero() {
        assert_eq!(digits_to_biguint(""), Ok(BigUint::zero()));
        assert_eq!(digits_to_biguint("0042"), Ok(BigUint::from(42u8)));
    }
}
