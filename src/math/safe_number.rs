//! Guard against silent precision loss when producing `f64` values.
//!
//! An IEEE 754 double carries 15 significant decimal digits reliably.
//! Decimal text with more digits than that is only converted when the
//! caller explicitly accepts the loss.

use crate::error::{AmountError, Result};

/// Most decimal digits a double is guaranteed to round-trip.
pub const MAX_SAFE_DIGITS: usize = 15;

/// Largest integer magnitude a double represents exactly (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Counts the decimal digits of `text`, ignoring sign and decimal point.
#[must_use]
pub fn digit_count(text: &str) -> usize {
    text.bytes().filter(u8::is_ascii_digit).count()
}

/// Returns `true` if `text` converts to `f64` without losing digits.
#[must_use]
pub fn is_safe_number(text: &str) -> bool {
    digit_count(text) <= MAX_SAFE_DIGITS
}

/// Converts plain decimal text (`[-]digits[.digits]`) to `f64`.
///
/// # Errors
///
/// - [`AmountError::UnsafeNumber`] if `text` has more than 15 digits and
///   `allow_unsafe` is `false`.
/// - [`AmountError::InvalidDecimal`] if `text` is not a number.
///
/// # Examples
///
/// ```
/// use unitscale::math::to_f64_guarded;
///
/// assert_eq!(to_f64_guarded("-1.01", false), Ok(-1.01));
/// assert!(to_f64_guarded("12345678901234567890", false).is_err());
/// assert!(to_f64_guarded("12345678901234567890", true).is_ok());
/// ```
pub fn to_f64_guarded(text: &str, allow_unsafe: bool) -> Result<f64> {
    let digits = digit_count(text);
    if digits > MAX_SAFE_DIGITS {
        if !allow_unsafe {
            return Err(AmountError::UnsafeNumber(format!(
                "'{text}' has {digits} digits, more than the {MAX_SAFE_DIGITS} a double holds exactly"
            )));
        }
        tracing::debug!(text, digits, "lossy numeric conversion explicitly allowed");
    }
    text.parse::<f64>()
        .map_err(|_| AmountError::InvalidDecimal(format!("'{text}' is not a number")))
}
