//! Top-level request enum.
//!
//! [`AmountRequest`] is the declarative description of one engine call.
//! Each variant carries the raw value and the option set of its operation,
//! and the engine dispatches on it with an exhaustive match:
//!
//! ```text
//! match request {
//!     AmountRequest::ToBase { value, options }   => to_base(value, options),
//!     AmountRequest::ToParent { value, options } => to_parent(value, options),
//!     AmountRequest::Format { value, options }   => format(value, options),
//! }
//! ```

use core::fmt;
use core::str::FromStr;

use super::{DecimalsSource, FormatOptions, ToBaseOptions, ToParentOptions};
use crate::domain::AmountInput;
use crate::error::AmountError;

/// The operation tag of a request.
///
/// Tags arriving as text (for example from a UI layer) are parsed with
/// [`FromStr`]; an unrecognized tag fails with
/// [`AmountError::Generic`].
///
/// # Examples
///
/// ```
/// use unitscale::config::Operation;
///
/// assert_eq!("toParent".parse::<Operation>(), Ok(Operation::ToParent));
/// assert!("swap".parse::<Operation>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Parent units to base units.
    ToBase,
    /// Base units to parent units.
    ToParent,
    /// Base units to display text.
    Format,
}

impl Operation {
    /// Returns the textual tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ToBase => "toBase",
            Self::ToParent => "toParent",
            Self::Format => "format",
        }
    }
}

impl FromStr for Operation {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toBase" => Ok(Self::ToBase),
            "toParent" => Ok(Self::ToParent),
            "format" => Ok(Self::Format),
            other => Err(AmountError::Generic(format!(
                "unsupported operation '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One engine call: operation, raw value and options.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountRequest {
    /// Convert a parent-unit amount into base units.
    ToBase {
        /// Parent-unit amount.
        value: AmountInput,
        /// Conversion options.
        options: ToBaseOptions,
    },
    /// Render a base-unit amount in parent units.
    ToParent {
        /// Base-unit amount.
        value: AmountInput,
        /// Rendering options.
        options: ToParentOptions,
    },
    /// Format a base-unit amount for display.
    Format {
        /// Base-unit amount.
        value: AmountInput,
        /// Formatting options.
        options: FormatOptions,
    },
}

impl AmountRequest {
    /// Builds a [`ToBase`](Self::ToBase) request.
    #[must_use]
    pub fn to_base(value: impl Into<AmountInput>, options: ToBaseOptions) -> Self {
        Self::ToBase {
            value: value.into(),
            options,
        }
    }

    /// Builds a [`ToParent`](Self::ToParent) request.
    #[must_use]
    pub fn to_parent(value: impl Into<AmountInput>, options: ToParentOptions) -> Self {
        Self::ToParent {
            value: value.into(),
            options,
        }
    }

    /// Builds a [`Format`](Self::Format) request.
    #[must_use]
    pub fn format(value: impl Into<AmountInput>, options: FormatOptions) -> Self {
        Self::Format {
            value: value.into(),
            options,
        }
    }

    /// Returns the operation tag of this request.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::ToBase { .. } => Operation::ToBase,
            Self::ToParent { .. } => Operation::ToParent,
            Self::Format { .. } => Operation::Format,
        }
    }

    /// Returns the decimal-place source of this request.
    #[must_use]
    pub const fn source(&self) -> &DecimalsSource {
        match self {
            Self::ToBase { options, .. } => options.source(),
            Self::ToParent { options, .. } => options.source(),
            Self::Format { options, .. } => options.source(),
        }
    }
}

impl fmt::Display for AmountRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operation().as_str())
    }
}
