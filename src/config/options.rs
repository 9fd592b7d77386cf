//! Per-operation option sets.
//!
//! Each operation takes a declarative option struct describing where the
//! decimal places come from and how the result should look. The structs
//! are plain values: built once, consumed by a single call.

use crate::domain::{DecimalCount, Decimals, OutputType, RoundingMode, MAX_DECIMALS};
use crate::error::{AmountError, Result};
use crate::traits::AssetSource;

/// Upper limit for any requested fraction width (`fixed`, minimum and
/// maximum fraction digits).
pub const MAX_FRACTION_DIGITS: usize = MAX_DECIMALS as usize;

fn check_width(option: &str, digits: usize) -> Result<()> {
    if digits > MAX_FRACTION_DIGITS {
        return Err(AmountError::Generic(format!(
            "{option} ({digits}) exceeds {MAX_FRACTION_DIGITS}"
        )));
    }
    Ok(())
}

/// Where an operation takes its decimal places from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum DecimalsSource {
    /// An explicit count, validated at resolution time.
    Decimals(DecimalCount),
    /// An asset identifier looked up in the asset spec table.
    AssetId(String),
}

impl DecimalsSource {
    /// Resolves the validated decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::InvalidDecimalPlaces`] if the explicit count
    /// is not an integer in `0..=60`, or if the asset cannot be resolved.
    pub fn resolve<A: AssetSource + ?Sized>(&self, assets: &A) -> Result<Decimals> {
        match self {
            Self::Decimals(count) => count.resolve(),
            Self::AssetId(id) => assets.decimals_for(id),
        }
    }
}

impl From<Decimals> for DecimalsSource {
    fn from(value: Decimals) -> Self {
        Self::Decimals(value.into())
    }
}

/// Options for converting parent units into base units.
///
/// # Defaults
///
/// - rounding: [`RoundingMode::Truncate`]
/// - output: [`OutputType::Integer`]
/// - unsafe numbers: rejected
///
/// # Examples
///
/// ```
/// use unitscale::config::ToBaseOptions;
/// use unitscale::domain::{OutputType, RoundingMode};
///
/// let opts = ToBaseOptions::with_decimals(2)
///     .rounding(RoundingMode::Round)
///     .output(OutputType::Text);
/// assert_eq!(opts.rounding_mode(), RoundingMode::Round);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ToBaseOptions {
    #[cfg_attr(feature = "serde", serde(flatten))]
    source: DecimalsSource,
    #[cfg_attr(feature = "serde", serde(default))]
    rounding: RoundingMode,
    #[cfg_attr(feature = "serde", serde(default))]
    output: OutputType,
    #[cfg_attr(feature = "serde", serde(default))]
    allow_unsafe_number: bool,
}

impl ToBaseOptions {
    /// Creates options with default rounding and output.
    #[must_use]
    pub fn new(source: DecimalsSource) -> Self {
        Self {
            source,
            rounding: RoundingMode::default(),
            output: OutputType::Integer,
            allow_unsafe_number: false,
        }
    }

    /// Options with an explicit decimal-place count.
    #[must_use]
    pub fn with_decimals(decimals: i64) -> Self {
        Self::new(DecimalsSource::Decimals(decimals.into()))
    }

    /// Options resolving decimal places from an asset.
    #[must_use]
    pub fn for_asset(asset_id: impl Into<String>) -> Self {
        Self::new(DecimalsSource::AssetId(asset_id.into()))
    }

    /// Sets the rounding mode.
    #[must_use]
    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Sets the output representation.
    #[must_use]
    pub fn output(mut self, output: OutputType) -> Self {
        self.output = output;
        self
    }

    /// Allows lossy `f64` output.
    #[must_use]
    pub fn allow_unsafe_number(mut self, allow: bool) -> Self {
        self.allow_unsafe_number = allow;
        self
    }

    /// Returns the decimal-place source.
    #[must_use]
    pub const fn source(&self) -> &DecimalsSource {
        &self.source
    }

    /// Returns the rounding mode.
    #[must_use]
    pub const fn rounding_mode(&self) -> RoundingMode {
        self.rounding
    }

    /// Returns the output representation.
    #[must_use]
    pub const fn output_type(&self) -> OutputType {
        self.output
    }

    /// Returns `true` if lossy `f64` output is allowed.
    #[must_use]
    pub const fn unsafe_number_allowed(&self) -> bool {
        self.allow_unsafe_number
    }
}

#[cfg(feature = "serde")]
const fn default_true() -> bool {
    true
}

#[cfg(feature = "serde")]
const fn default_text() -> OutputType {
    OutputType::Text
}

/// Options for rendering base units as parent-unit text.
///
/// # Defaults
///
/// - output: [`OutputType::Text`]
/// - fixed: none
/// - trim: `true`
/// - group: `false`
/// - unsafe numbers: rejected
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ToParentOptions {
    #[cfg_attr(feature = "serde", serde(flatten))]
    source: DecimalsSource,
    #[cfg_attr(feature = "serde", serde(default = "default_text"))]
    output: OutputType,
    #[cfg_attr(feature = "serde", serde(default))]
    fixed: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    trim: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    group: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    allow_unsafe_number: bool,
}

impl ToParentOptions {
    /// Creates options with default presentation.
    #[must_use]
    pub fn new(source: DecimalsSource) -> Self {
        Self {
            source,
            output: OutputType::Text,
            fixed: None,
            trim: true,
            group: false,
            allow_unsafe_number: false,
        }
    }

    /// Options with an explicit decimal-place count.
    #[must_use]
    pub fn with_decimals(decimals: i64) -> Self {
        Self::new(DecimalsSource::Decimals(decimals.into()))
    }

    /// Options resolving decimal places from an asset.
    #[must_use]
    pub fn for_asset(asset_id: impl Into<String>) -> Self {
        Self::new(DecimalsSource::AssetId(asset_id.into()))
    }

    /// Sets the output representation.
    #[must_use]
    pub fn output(mut self, output: OutputType) -> Self {
        self.output = output;
        self
    }

    /// Pads or truncates the fraction to exactly `digits` digits. Disables
    /// trimming.
    #[must_use]
    pub fn fixed(mut self, digits: usize) -> Self {
        self.fixed = Some(digits);
        self
    }

    /// Enables or disables trailing-zero trimming.
    #[must_use]
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Enables or disables thousands grouping.
    #[must_use]
    pub fn group(mut self, group: bool) -> Self {
        self.group = group;
        self
    }

    /// Allows lossy `f64` output.
    #[must_use]
    pub fn allow_unsafe_number(mut self, allow: bool) -> Self {
        self.allow_unsafe_number = allow;
        self
    }

    /// Returns the decimal-place source.
    #[must_use]
    pub const fn source(&self) -> &DecimalsSource {
        &self.source
    }

    /// Returns the output representation.
    #[must_use]
    pub const fn output_type(&self) -> OutputType {
        self.output
    }

    /// Returns the fixed fraction width, if any.
    #[must_use]
    pub const fn fixed_digits(&self) -> Option<usize> {
        self.fixed
    }

    /// Returns `true` if trailing zeros are trimmed.
    #[must_use]
    pub const fn trims(&self) -> bool {
        self.trim
    }

    /// Returns `true` if the integer part is grouped.
    #[must_use]
    pub const fn groups(&self) -> bool {
        self.group
    }

    /// Returns `true` if lossy `f64` output is allowed.
    #[must_use]
    pub const fn unsafe_number_allowed(&self) -> bool {
        self.allow_unsafe_number
    }

    /// Validates the presentation settings.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::Generic`] if the fixed width exceeds
    /// [`MAX_FRACTION_DIGITS`].
    pub fn validate(&self) -> Result<()> {
        match self.fixed {
            Some(digits) => check_width("fixed fraction digits", digits),
            None => Ok(()),
        }
    }
}

/// Options for display formatting.
///
/// # Defaults
///
/// - minimum fraction digits: 0
/// - maximum fraction digits: the asset's decimal places, or the minimum
///   if that is larger
/// - group: `true`
///
/// # Validation
///
/// Neither bound may exceed [`MAX_FRACTION_DIGITS`]. When both bounds are
/// set, the minimum must not exceed the maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FormatOptions {
    #[cfg_attr(feature = "serde", serde(flatten))]
    source: DecimalsSource,
    #[cfg_attr(feature = "serde", serde(default))]
    min_fraction_digits: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default))]
    max_fraction_digits: Option<usize>,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    group: bool,
}

impl FormatOptions {
    /// Creates options with default bounds and grouping on.
    #[must_use]
    pub fn new(source: DecimalsSource) -> Self {
        Self {
            source,
            min_fraction_digits: None,
            max_fraction_digits: None,
            group: true,
        }
    }

    /// Options with an explicit decimal-place count.
    #[must_use]
    pub fn with_decimals(decimals: i64) -> Self {
        Self::new(DecimalsSource::Decimals(decimals.into()))
    }

    /// Options resolving decimal places from an asset.
    #[must_use]
    pub fn for_asset(asset_id: impl Into<String>) -> Self {
        Self::new(DecimalsSource::AssetId(asset_id.into()))
    }

    /// Sets the minimum number of fraction digits.
    #[must_use]
    pub fn min_fraction_digits(mut self, digits: usize) -> Self {
        self.min_fraction_digits = Some(digits);
        self
    }

    /// Sets the maximum number of fraction digits.
    #[must_use]
    pub fn max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = Some(digits);
        self
    }

    /// Enables or disables thousands grouping.
    #[must_use]
    pub fn group(mut self, group: bool) -> Self {
        self.group = group;
        self
    }

    /// Returns the decimal-place source.
    #[must_use]
    pub const fn source(&self) -> &DecimalsSource {
        &self.source
    }

    /// Returns `true` if the integer part is grouped.
    #[must_use]
    pub const fn groups(&self) -> bool {
        self.group
    }

    /// Returns the effective `(min, max)` fraction bounds for `decimals`.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn fraction_bounds(&self, decimals: Decimals) -> Result<(usize, usize)> {
        self.validate()?;
        let min = self.min_fraction_digits.unwrap_or(0);
        let max = self
            .max_fraction_digits
            .unwrap_or_else(|| decimals.width().max(min));
        Ok((min, max))
    }

    /// Validates the explicitly set bounds.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::Generic`] if a bound exceeds
    /// [`MAX_FRACTION_DIGITS`], or if both bounds are set and the minimum
    /// exceeds the maximum.
    pub fn validate(&self) -> Result<()> {
        if let Some(min) = self.min_fraction_digits {
            check_width("minimum fraction digits", min)?;
        }
        if let Some(max) = self.max_fraction_digits {
            check_width("maximum fraction digits", max)?;
        }
        match (self.min_fraction_digits, self.max_fraction_digits) {
            (Some(min), Some(max)) if min > max => Err(AmountError::Generic(format!(
                "minimum fraction digits ({min}) exceed maximum ({max})"
            ))),
            _ => Ok(()),
        }
    }
}
