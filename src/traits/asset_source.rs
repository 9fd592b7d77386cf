//! Lookup seam for per-asset decimal places.
//!
//! The asset spec table is external configuration: the engine consumes it
//! but never produces or mutates it. [`AssetSource`] is the one thing the
//! engine needs from it, so callers can plug in the bundled
//! [`AssetTable`](crate::config::AssetTable), a plain `HashMap`, or their own
//! registry.

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::domain::{AssetSpec, Decimals};
use crate::error::{AmountError, Result};

/// Read-only access to asset spec entries.
///
/// # Contract
///
/// - Lookups have no side effects.
/// - A missing asset, a missing decimal count, or an out-of-range decimal
///   count resolves to [`AmountError::InvalidDecimalPlaces`]; no default is
///   ever guessed.
pub trait AssetSource {
    /// Returns the spec entry for `asset_id`, if known.
    fn asset_spec(&self, asset_id: &str) -> Option<&AssetSpec>;

    /// Resolves the validated decimal places for `asset_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::InvalidDecimalPlaces`] if the asset is unknown
    /// or its configured count is missing or outside `0..=60`.
    fn decimals_for(&self, asset_id: &str) -> Result<Decimals> {
        match self.asset_spec(asset_id) {
            Some(spec) => spec.decimals(),
            None => Err(AmountError::InvalidDecimalPlaces(format!(
                "unknown asset '{asset_id}'"
            ))),
        }
    }
}

impl<S: BuildHasher> AssetSource for HashMap<String, AssetSpec, S> {
    fn asset_spec(&self, asset_id: &str) -> Option<&AssetSpec> {
        self.get(asset_id)
    }
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
    fn asset_spec(&self, asset_id: &str) -> Option<&AssetSpec> {
        (**self).asset_spec(asset_id)
    }
}
