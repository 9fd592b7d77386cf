//! Fundamental domain value types used throughout the library.
//!
//! This module contains the value types that model amounts and their
//! precision: decimal places, rounding modes, scaled base-unit integers,
//! raw inputs and produced outputs, and asset spec entries. All types use
//! newtypes or closed enums with validated constructors to enforce
//! invariants.

mod amount;
mod asset;
mod decimals;
mod rounding;
mod value;

pub use amount::ScaledInteger;
pub use asset::AssetSpec;
pub use decimals::{DecimalCount, Decimals, MAX_DECIMALS};
pub use rounding::RoundingMode;
pub use value::{AmountInput, AmountOutput, OutputType};
