//! Carry computation for digits dropped past an asset's decimal places.
//!
//! Scaling works on the magnitude of the amount and re-applies the sign at
//! the end, so every mode reduces to "add one unit to the magnitude or not".
//!
//! # Convention
//!
//! | Mode | Positive amount | Negative amount |
//! |------|-----------------|-----------------|
//! | `Round` | carry if first dropped digit ≥ 5 | same (away from zero) |
//! | `Ceil` | carry if any dropped digit ≠ 0 | never (toward zero is up) |
//! | `Floor` | never (toward zero is down) | carry if any dropped digit ≠ 0 |
//! | `Truncate` | never | never |
//!
//! # Examples
//!
//! ```
//! use unitscale::domain::RoundingMode;
//! use unitscale::math::carry;
//!
//! // 1.235 at 2 places: "5" is dropped
//! assert!(carry("5", false, RoundingMode::Round));
//! // -1.001 at 2 places: ceiling is -1.00, floor is -1.01
//! assert!(!carry("1", true, RoundingMode::Ceil));
//! assert!(carry("1", true, RoundingMode::Floor));
//! ```

use crate::domain::RoundingMode;

/// Decides whether the kept magnitude must grow by one unit.
///
/// `rest` holds the decimal digits that fall past the asset's precision;
/// `negative` is the sign of the whole amount.
#[must_use]
pub fn carry(rest: &str, negative: bool, mode: RoundingMode) -> bool {
    match mode {
        RoundingMode::Round => rest.bytes().next().is_some_and(|b| b >= b'5'),
        RoundingMode::Ceil => !negative && has_nonzero(rest),
        RoundingMode::Floor => negative && has_nonzero(rest),
        RoundingMode::Truncate => false,
    }
}

fn has_nonzero(digits: &str) -> bool {
    digits.bytes().any(|b| b != b'0')
}
