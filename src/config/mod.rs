//! Configuration consumed by the engine.
//!
//! This module contains the [`AmountRequest`] enum (the declarative
//! description of one engine call), the per-operation option structs, and
//! the [`AssetTable`] holding per-asset decimal places.

mod asset_table;
mod options;
mod request;

pub use asset_table::AssetTable;
pub use options::{
    DecimalsSource, FormatOptions, ToBaseOptions, ToParentOptions, MAX_FRACTION_DIGITS,
};
pub use request::{AmountRequest, Operation};
