//! Base-unit integer → parent-unit decimal text.

use num_bigint::{BigInt, Sign};

use super::coerce::coerce_integer;
use crate::domain::{AmountInput, AmountOutput, Decimals, OutputType};
use crate::error::{AmountError, Result};
use crate::math::{group_thousands, to_f64_guarded};

/// Full-precision parent-unit rendering of a base-unit integer.
///
/// `fraction` is exactly `decimals` digits wide until post-processing
/// narrows or widens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rendered {
    pub(crate) negative: bool,
    pub(crate) integer: String,
    pub(crate) fraction: String,
}

impl Rendered {
    /// Splits `raw` into `raw / 10^d` and the zero-padded `raw % 10^d`.
    pub(crate) fn new(raw: &BigInt, decimals: Decimals) -> Self {
        let magnitude = raw.magnitude();
        let factor = decimals.factor();
        let width = decimals.width();
        let integer = (magnitude / factor).to_string();
        let fraction = if width == 0 {
            String::new()
        } else {
            format!("{:0>width$}", (magnitude % factor).to_string())
        };
        Self {
            negative: raw.sign() == Sign::Minus,
            integer,
            fraction,
        }
    }

    /// Pads with zeros or truncates the fraction to exactly `digits`.
    pub(crate) fn fit_fraction(&mut self, digits: usize) {
        if self.fraction.len() > digits {
            self.fraction.truncate(digits);
        } else {
            let pad = digits - self.fraction.len();
            self.fraction.extend(core::iter::repeat('0').take(pad));
        }
    }

    /// Strips trailing zero fraction digits.
    pub(crate) fn trim_fraction(&mut self) {
        let kept = self.fraction.trim_end_matches('0').len();
        self.fraction.truncate(kept);
    }

    fn is_zero(&self) -> bool {
        self.integer.bytes().chain(self.fraction.bytes()).all(|b| b == b'0')
    }

    /// Plain text: sign, integer digits, and the fraction if non-empty.
    ///
    /// A rendering whose digits are all zero carries no sign.
    pub(crate) fn to_plain(&self) -> String {
        let mut out = String::with_capacity(self.integer.len() + self.fraction.len() + 2);
        if self.negative && !self.is_zero() {
            out.push('-');
        }
        out.push_str(&self.integer);
        if !self.fraction.is_empty() {
            out.push('.');
            out.push_str(&self.fraction);
        }
        out
    }
}

/// Presentation settings for [`to_parent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RenderSettings {
    pub(crate) output: OutputType,
    pub(crate) fixed: Option<usize>,
    pub(crate) trim: bool,
    pub(crate) group: bool,
    pub(crate) allow_unsafe: bool,
}

/// Renders a base-unit amount in parent units.
///
/// Post-processing runs in order: fixed width (which disables trimming),
/// else trailing-zero trimming, then grouping of the integer digits.
/// Numeric output always reads the ungrouped text.
///
/// # Errors
///
/// - [`AmountError::InvalidInteger`] / [`AmountError::UnsafeNumber`] from
///   strict coercion of `value`.
/// - [`AmountError::UnsafeNumber`] if numeric output would lose digits.
/// - [`AmountError::Generic`] if integer output is requested.
pub(crate) fn to_parent(
    value: &AmountInput,
    decimals: Decimals,
    settings: RenderSettings,
) -> Result<AmountOutput> {
    let raw = coerce_integer(value)?;
    let mut rendered = Rendered::new(&raw, decimals);
    match settings.fixed {
        Some(digits) => rendered.fit_fraction(digits),
        None if settings.trim => rendered.trim_fraction(),
        None => {}
    }
    let plain = rendered.to_plain();

    match settings.output {
        OutputType::Text if settings.group => Ok(AmountOutput::Text(group_thousands(&plain))),
        OutputType::Text => Ok(AmountOutput::Text(plain)),
        OutputType::Number => {
            to_f64_guarded(&plain, settings.allow_unsafe).map(AmountOutput::Number)
        }
        OutputType::Integer => Err(AmountError::Generic(
            "parent units have no integer representation; request text or number".to_owned(),
        )),
    }
}
