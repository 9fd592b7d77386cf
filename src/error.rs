//! Unified error types for the unitscale library.
//!
//! All fallible operations across the crate return [`AmountError`] as their
//! error type. Every variant maps onto exactly one [`ErrorKind`], which is
//! the stable, caller-actionable classification of the failure.

use core::fmt;

/// Closed classification of every failure the engine can report.
///
/// The kind is assigned once at the failure site and never changes.
///
/// | Kind | Meaning |
/// |------|---------|
/// | [`InvalidDecimal`](Self::InvalidDecimal) | malformed decimal text |
/// | [`InvalidInteger`](Self::InvalidInteger) | malformed or non-integral base-unit value |
/// | [`InvalidDecimalPlaces`](Self::InvalidDecimalPlaces) | decimal-place count outside `0..=60`, or unresolvable asset |
/// | [`UnsafeNumber`](Self::UnsafeNumber) | conversion to `f64` would lose precision |
/// | [`Generic`](Self::Generic) | unsupported operation or option combination |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input text is not a valid decimal number.
    InvalidDecimal,
    /// Input is not a valid integer.
    InvalidInteger,
    /// Decimal-place count is missing or out of range.
    InvalidDecimalPlaces,
    /// A double-precision result would silently lose digits.
    UnsafeNumber,
    /// Catch-all for unsupported operations.
    Generic,
}

impl ErrorKind {
    /// Returns the stable machine code for this kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidDecimal => "INVALID_DECIMAL",
            Self::InvalidInteger => "INVALID_INTEGER",
            Self::InvalidDecimalPlaces => "INVALID_DECIMAL_PLACES",
            Self::UnsafeNumber => "UNSAFE_NUMBER",
            Self::Generic => "GENERIC",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned by every fallible operation in the crate.
///
/// The `Display` output is the human-readable message; [`kind`](Self::kind)
/// gives the machine-readable classification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// Malformed decimal input.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),

    /// Malformed or non-integral integer input.
    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    /// Decimal-place count missing or outside `0..=60`.
    #[error("invalid decimal places: {0}")]
    InvalidDecimalPlaces(String),

    /// Converting to `f64` would lose precision.
    #[error("unsafe number: {0}")]
    UnsafeNumber(String),

    /// Unsupported operation or option combination.
    #[error("{0}")]
    Generic(String),
}

impl AmountError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDecimal(_) => ErrorKind::InvalidDecimal,
            Self::InvalidInteger(_) => ErrorKind::InvalidInteger,
            Self::InvalidDecimalPlaces(_) => ErrorKind::InvalidDecimalPlaces,
            Self::UnsafeNumber(_) => ErrorKind::UnsafeNumber,
            Self::Generic(_) => ErrorKind::Generic,
        }
    }

    /// Returns the message attached at the failure site, without the
    /// kind prefix.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidDecimal(m)
            | Self::InvalidInteger(m)
            | Self::InvalidDecimalPlaces(m)
            | Self::UnsafeNumber(m)
            | Self::Generic(m) => m,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmountError>;
