//! Display formatting of base-unit amounts.

use super::coerce::coerce_integer;
use super::to_parent::Rendered;
use crate::domain::{AmountInput, Decimals};
use crate::error::Result;
use crate::math::group_thousands;

/// Formats a base-unit amount for display.
///
/// Starts from the untrimmed full-precision rendering, then clamps the
/// fraction to `[min, max]` digits: digits past `max` are cut (no
/// rounding), trailing zeros beyond `min` are dropped, and the fraction is
/// padded back up to `min`. Callers guarantee `min <= max`.
pub(crate) fn format(
    value: &AmountInput,
    decimals: Decimals,
    min: usize,
    max: usize,
    group: bool,
) -> Result<String> {
    let raw = coerce_integer(value)?;
    let mut rendered = Rendered::new(&raw, decimals);

    if rendered.fraction.len() > max {
        rendered.fraction.truncate(max);
    }
    rendered.trim_fraction();
    if rendered.fraction.len() < min {
        rendered.fit_fraction(min);
    }

    let plain = rendered.to_plain();
    Ok(if group { group_thousands(&plain) } else { plain })
}
