//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use unitscale::prelude::*;
//! ```

pub use crate::domain::{
    AmountInput, AmountOutput, AssetSpec, DecimalCount, Decimals, OutputType, RoundingMode,
    ScaledInteger,
};

pub use crate::traits::AssetSource;

pub use crate::config::{
    AmountRequest, AssetTable, DecimalsSource, FormatOptions, Operation, ToBaseOptions,
    ToParentOptions, MAX_FRACTION_DIGITS,
};

pub use crate::error::{AmountError, ErrorKind, Result};

pub use crate::engine::{amount, AmountEngine};
