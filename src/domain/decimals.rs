//! Asset decimal places.

use num_bigint::BigUint;

use crate::error::{AmountError, Result};
use crate::math::pow10;

/// Maximum supported decimal places.
pub const MAX_DECIMALS: u8 = 60;

/// The number of fractional digits separating base units from parent
/// units for an asset.
///
/// Valid range is `0..=60`. Construction is validated: anything outside
/// the range (including negative counts) is rejected before any arithmetic
/// happens.
///
/// # Examples
///
/// ```
/// use unitscale::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// assert_eq!(d.factor().to_string(), "1000000");
/// assert!(Decimals::new(61).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum supported decimal places (60).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::InvalidDecimalPlaces`] if `value` is negative
    /// or exceeds 60.
    pub fn new(value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(v) if v <= MAX_DECIMALS => Ok(Self(v)),
            _ => Err(AmountError::InvalidDecimalPlaces(format!(
                "{value} is outside 0..={MAX_DECIMALS}"
            ))),
        }
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns the count as a digit width.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.0 as usize
    }

    /// Returns `10^decimals`, served from the shared power-of-ten cache.
    #[must_use]
    pub fn factor(&self) -> &'static BigUint {
        pow10(*self)
    }
}

impl TryFrom<i64> for Decimals {
    type Error = AmountError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl core::fmt::Display for Decimals {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A decimal-place count as written in configuration, not yet validated.
///
/// Asset tables and requests come from outside the crate, so the count
/// slot may hold anything. The raw value is kept as-is and only turned
/// into [`Decimals`] by [`resolve`](Self::resolve), which reports every
/// problem as [`AmountError::InvalidDecimalPlaces`].
///
/// With the `serde` feature, any JSON value deserializes: integers (and
/// integral numbers such as `6.0`) become [`Integer`](Self::Integer),
/// everything else is kept as [`Malformed`](Self::Malformed) JSON text.
///
/// # Examples
///
/// ```
/// use unitscale::domain::DecimalCount;
///
/// assert_eq!(DecimalCount::from(6).resolve().map(|d| d.get()), Ok(6));
/// assert!(DecimalCount::Malformed("2.5".into()).resolve().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecimalCount {
    /// An integer count, possibly out of range.
    Integer(i64),
    /// A value that is not an integer, in its JSON rendering.
    Malformed(String),
}

impl DecimalCount {
    /// Validates the count.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::InvalidDecimalPlaces`] unless the count is an
    /// integer in `0..=60`.
    pub fn resolve(&self) -> Result<Decimals> {
        match self {
            Self::Integer(v) => Decimals::new(*v),
            Self::Malformed(raw) => Err(AmountError::InvalidDecimalPlaces(format!(
                "{raw} is not an integer in 0..={MAX_DECIMALS}"
            ))),
        }
    }

    #[cfg(feature = "serde")]
    fn from_json(value: &serde_json::Value) -> Self {
        if let Some(v) = value.as_i64() {
            return Self::Integer(v);
        }
        match value.as_f64() {
            // Only small integral values are exact; anything larger is out
            // of range regardless.
            Some(f) if f.fract() == 0.0 && f.abs() <= 1e15 => Self::Integer(f as i64),
            _ => Self::Malformed(value.to_string()),
        }
    }
}

impl From<i64> for DecimalCount {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimals> for DecimalCount {
    fn from(value: Decimals) -> Self {
        Self::Integer(i64::from(value.get()))
    }
}

impl core::fmt::Display for DecimalCount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Malformed(raw) => f.write_str(raw),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DecimalCount {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Integer(v) => serializer.serialize_i64(*v),
            Self::Malformed(raw) => serializer.serialize_str(raw),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DecimalCount {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}
