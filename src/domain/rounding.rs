//! Rounding mode applied when a decimal has more fractional digits than the
//! asset supports.

use core::fmt;
use core::str::FromStr;

use crate::error::AmountError;

/// Rounding applied to the digits that fall past an asset's decimal places.
///
/// All modes are sign-correct: [`Floor`](Self::Floor) always moves toward
/// negative infinity and [`Ceil`](Self::Ceil) toward positive infinity,
/// whatever the sign of the amount.
///
/// # Examples
///
/// ```
/// use unitscale::domain::RoundingMode;
///
/// let r: RoundingMode = "ceil".parse().expect("known mode");
/// assert_eq!(r, RoundingMode::Ceil);
/// assert_eq!(RoundingMode::default(), RoundingMode::Truncate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RoundingMode {
    /// Half-up, away from zero, decided by the first dropped digit.
    Round,
    /// Toward negative infinity.
    Floor,
    /// Toward positive infinity.
    Ceil,
    /// Drop excess digits (toward zero).
    #[default]
    Truncate,
}

impl RoundingMode {
    /// Returns the textual tag of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Truncate => "truncate",
        }
    }

    /// Returns a human-readable description of the rounding direction.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Round => "round half away from zero",
            Self::Floor => "round towards negative infinity",
            Self::Ceil => "round towards positive infinity",
            Self::Truncate => "round towards zero",
        }
    }
}

impl FromStr for RoundingMode {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "round" => Ok(Self::Round),
            "floor" => Ok(Self::Floor),
            "ceil" => Ok(Self::Ceil),
            "truncate" => Ok(Self::Truncate),
            other => Err(AmountError::Generic(format!(
                "unsupported rounding mode '{other}'"
            ))),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
