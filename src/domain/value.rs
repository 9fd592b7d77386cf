//! Raw input and produced output values.

use core::fmt;

use num_bigint::BigInt;

use super::ScaledInteger;

/// A raw amount as handed over by the caller.
///
/// The engine accepts the same loose set of shapes a UI form produces:
/// an arbitrary-precision integer, a machine integer, a double, or text.
/// How each shape is interpreted depends on the operation (parent-unit
/// parsing for `to_base`, strict integer coercion for `to_parent` and
/// `format`).
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    /// Arbitrary-precision integer.
    Big(BigInt),
    /// Machine integer.
    Int(i128),
    /// Double-precision number.
    Float(f64),
    /// Decimal or integer text.
    Text(String),
}

impl From<BigInt> for AmountInput {
    fn from(value: BigInt) -> Self {
        Self::Big(value)
    }
}

impl From<ScaledInteger> for AmountInput {
    fn from(value: ScaledInteger) -> Self {
        Self::Big(value.into_inner())
    }
}

impl From<u128> for AmountInput {
    fn from(value: u128) -> Self {
        Self::Big(BigInt::from(value))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AmountInput {
                fn from(value: $t) -> Self {
                    Self::Int(i128::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for AmountInput {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The representation an operation should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum OutputType {
    /// Arbitrary-precision integer. Only meaningful for base units.
    #[default]
    Integer,
    /// Exact decimal text.
    Text,
    /// Double, subject to the safe-numeric guard.
    Number,
}

/// The value produced by an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountOutput {
    /// Arbitrary-precision integer.
    Integer(BigInt),
    /// Decimal text.
    Text(String),
    /// Double-precision number.
    Number(f64),
}

impl AmountOutput {
    /// Returns the integer if this is an [`Integer`](Self::Integer) output.
    #[must_use]
    pub const fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Self::Integer(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the text if this is a [`Text`](Self::Text) output.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the number if this is a [`Number`](Self::Number) output.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for AmountOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Number(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AmountOutput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Integers travel as text so JSON consumers never truncate them.
        match self {
            Self::Integer(v) => serializer.collect_str(v),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Number(v) => serializer.serialize_f64(*v),
        }
    }
}
