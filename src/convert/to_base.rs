//! Parent-unit decimal → base-unit integer.

use num_bigint::{BigInt, BigUint, Sign};

use super::parse::{digits_to_biguint, normalize, parse_decimal, ParsedDecimal};
use crate::domain::{AmountInput, AmountOutput, Decimals, OutputType, RoundingMode, ScaledInteger};
use crate::error::Result;
use crate::math::carry;

/// Scales a parsed decimal to `decimals` places.
///
/// The magnitude is computed as `integer * 10^d + fraction`, where the
/// fraction is right-padded to `d` digits, or cut to `d` digits with the
/// dropped tail deciding a carry of one unit. The sign is applied last, so
/// a magnitude that rounds to zero yields plain zero.
pub(crate) fn scale(
    parsed: &ParsedDecimal<'_>,
    decimals: Decimals,
    rounding: RoundingMode,
) -> Result<ScaledInteger> {
    let width = decimals.width();
    let (keep, rest) = if parsed.fraction.len() > width {
        parsed.fraction.split_at(width)
    } else {
        (parsed.fraction, "")
    };

    let integer = digits_to_biguint(parsed.integer)?;
    let fraction = if keep.len() == width {
        digits_to_biguint(keep)?
    } else {
        digits_to_biguint(&format!("{keep:0<width$}"))?
    };

    let mut magnitude = integer * decimals.factor() + fraction;
    if carry(rest, parsed.negative, rounding) {
        magnitude += BigUint::from(1u8);
    }

    let sign = if parsed.negative { Sign::Minus } else { Sign::Plus };
    Ok(ScaledInteger::from(BigInt::from_biguint(sign, magnitude)))
}

/// Converts a parent-unit amount to base units.
///
/// # Errors
///
/// Returns [`AmountError::InvalidDecimal`](crate::error::AmountError::InvalidDecimal)
/// if the value is not a finite decimal.
pub(crate) fn to_base(
    value: &AmountInput,
    decimals: Decimals,
    rounding: RoundingMode,
) -> Result<ScaledInteger> {
    let text = normalize(value)?;
    let parsed = parse_decimal(&text)?;
    scale(&parsed, decimals, rounding)
}

/// Hands a scaled integer out in the requested representation.
pub(crate) fn emit(
    scaled: ScaledInteger,
    output: OutputType,
    allow_unsafe: bool,
) -> Result<AmountOutput> {
    match output {
        OutputType::Integer => Ok(AmountOutput::Integer(scaled.into_inner())),
        OutputType::Text => Ok(AmountOutput::Text(scaled.to_string())),
        OutputType::Number => scaled.to_f64(allow_unsafe).map(AmountOutput::Number),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn dec(v: i64) -> Decimals {
        let Ok(d) = Decimals::new(v) else {
            panic!("valid decimals: {v}");
        };
        d
    }

    fn base(value: &str, d: i64, rounding: RoundingMode) -> String {
        let Ok(raw) = to_base(&AmountInput::from(value), dec(d), rounding) else {
            panic!("expected '{value}' to scale");
        };
        raw.to_string()
    }

    #[test]
    fn exact_fraction_length() {
        assert_eq!(base("1.23", 2, RoundingMode::Truncate), "123");
        assert_eq!(base("12.345678", 6, RoundingMode::Truncate), "12345678");
    }

    #[test]
    fn short_fraction_is_padded() {
        assert_eq!(base("1.2", 4, RoundingMode::Truncate), "12000");
        assert_eq!(base("7", 3, RoundingMode::Truncate), "7000");
    }

    #[test]
    fn zero_decimals() {
        assert_eq!(base("1500", 0, RoundingMode::Truncate), "1500");
        assert_eq!(base("1500.9", 0, RoundingMode::Truncate), "1500");
        assert_eq!(base("1500.9", 0, RoundingMode::Round), "1501");
    }

    #[test]
    fn round_half_up() {
        assert_eq!(base("1.23456", 2, RoundingMode::Round), "123");
        assert_eq!(base("1.235", 2, RoundingMode::Round), "124");
        assert_eq!(base("1.2349999", 2, RoundingMode::Round), "123");
    }

    #[test]
    fn round_negative_goes_away_from_zero() {
        assert_eq!(base("-1.005", 2, RoundingMode::Round), "-101");
        assert_eq!(base("-1.004", 2, RoundingMode::Round), "-100");
    }

    #[test]
    fn ceil_and_floor_are_mathematical() {
        assert_eq!(base("1.001", 2, RoundingMode::Ceil), "101");
        assert_eq!(base("1.001", 2, RoundingMode::Floor), "100");
        assert_eq!(base("-1.001", 2, RoundingMode::Ceil), "-100");
        assert_eq!(base("-1.001", 2, RoundingMode::Floor), "-101");
        assert_eq!(base("-1.000", 2, RoundingMode::Floor), "-100");
    }

    #[test]
    fn carry_propagates_across_integer_boundary() {
        assert_eq!(base("9.999", 2, RoundingMode::Round), "1000");
        assert_eq!(base("-0.999", 2, RoundingMode::Floor), "-100");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(base("-0.001", 2, RoundingMode::Truncate), "0");
        assert_eq!(base("-0.001", 2, RoundingMode::Ceil), "0");
        assert_eq!(base("-0", 2, RoundingMode::Truncate), "0");
    }

    #[test]
    fn separators_and_whitespace() {
        assert_eq!(base(" 1_000_000.50 ", 2, RoundingMode::Truncate), "100000050");
        assert_eq!(base("+0001.5", 1, RoundingMode::Truncate), "15");
    }

    #[test]
    fn sixty_decimals() {
        let text = base("1", 60, RoundingMode::Truncate);
        assert_eq!(text.len(), 61);
        assert!(text.starts_with('1'));
    }

    #[test]
    fn number_and_integer_inputs() {
        let Ok(raw) = to_base(&AmountInput::Float(0.5), dec(6), RoundingMode::Truncate) else {
            panic!("expected Ok");
        };
        assert_eq!(raw.to_string(), "500000");
        let Ok(raw) = to_base(&AmountInput::Int(-3), dec(2), RoundingMode::Truncate) else {
            panic!("expected Ok");
        };
        assert_eq!(raw.to_string(), "-300");
    }

    #[test]
    fn invalid_text_is_rejected() {
        let Err(e) = to_base(&AmountInput::from("12a.3"), dec(2), RoundingMode::Truncate) else {
            panic!("expected Err");
        };
        assert_eq!(e.kind(), ErrorKind::InvalidDecimal);
    }

    #[test]
    fn emit_representations() {
        let raw = ScaledInteger::from(BigInt::from(123));
        assert_eq!(
            emit(raw.clone(), OutputType::Integer, false),
            Ok(AmountOutput::Integer(BigInt::from(123)))
        );
        assert_eq!(
            emit(raw.clone(), OutputType::Text, false),
            Ok(AmountOutput::Text("123".into()))
        );
        assert_eq!(
            emit(raw, OutputType::Number, false),
            Ok(AmountOutput::Number(123.0))
        );
    }

    #[test]
    fn emit_number_is_guarded() {
        let Some(big) = BigInt::parse_bytes(b"1000000000000000000", 10) else {
            panic!("valid digits");
        };
        let Err(e) = emit(ScaledInteger::from(big), OutputType::Number, false) else {
            panic!("expected Err");
        };
        assert_eq!(e.kind(), ErrorKind::UnsafeNumber);
    }
}
