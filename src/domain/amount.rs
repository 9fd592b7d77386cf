//! Amount expressed in base units.

use core::fmt;

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::error::Result;
use crate::math::to_f64_guarded;

/// An amount in the smallest indivisible unit of an asset (cents, wei,
/// satoshi, ...).
///
/// Backed by an arbitrary-precision signed integer so that any amount at any
/// of the supported decimal places is represented exactly. Inside the crate
/// values are produced by the decimal parser or by strict integer coercion,
/// never through floating-point arithmetic.
///
/// # Examples
///
/// ```
/// use unitscale::domain::ScaledInteger;
/// use num_bigint::BigInt;
///
/// let raw = ScaledInteger::from(BigInt::from(-101));
/// assert!(raw.is_negative());
/// assert_eq!(raw.to_string(), "-101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct ScaledInteger(BigInt);

impl ScaledInteger {
    /// Returns a reference to the underlying integer.
    #[must_use]
    pub const fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Consumes the wrapper and returns the underlying integer.
    #[must_use]
    pub fn into_inner(self) -> BigInt {
        self.0
    }

    /// Returns `true` if the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Converts to `f64` through the safe-numeric guard.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::UnsafeNumber`](crate::error::AmountError::UnsafeNumber)
    /// if the amount has more than 15 digits and `allow_unsafe` is `false`.
    pub fn to_f64(&self, allow_unsafe: bool) -> Result<f64> {
        to_f64_guarded(&self.0.to_string(), allow_unsafe)
    }
}

impl From<BigInt> for ScaledInteger {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<ScaledInteger> for BigInt {
    fn from(value: ScaledInteger) -> Self {
        value.0
    }
}

impl fmt::Display for ScaledInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
