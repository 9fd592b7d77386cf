//! Per-asset display and precision metadata.

use super::{DecimalCount, Decimals};
use crate::error::{AmountError, Result};

/// One entry of the asset spec table.
///
/// The engine only ever reads [`decimal`](Self::decimal); `symbol` and
/// `name` are carried for the UI layer. The raw decimal count is kept
/// unvalidated because the table is external configuration: a missing,
/// non-integer or out-of-range count is reported when the entry is used,
/// not when it is loaded.
///
/// # Examples
///
/// ```
/// use unitscale::domain::AssetSpec;
///
/// let usdc = AssetSpec::new("USDC", "USD Coin", 6);
/// assert_eq!(usdc.decimals().map(|d| d.get()), Ok(6));
///
/// let broken = AssetSpec::new("BAD", "Broken", 99);
/// assert!(broken.decimals().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetSpec {
    /// Ticker symbol.
    #[cfg_attr(feature = "serde", serde(default))]
    pub symbol: String,
    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Decimal places between base and parent units, as configured.
    #[cfg_attr(feature = "serde", serde(default))]
    pub decimal: Option<DecimalCount>,
}

impl AssetSpec {
    /// Creates a new spec entry.
    #[must_use]
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, decimal: i64) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            decimal: Some(DecimalCount::Integer(decimal)),
        }
    }

    /// Returns the validated decimal places of this asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::InvalidDecimalPlaces`] if the count is missing,
    /// not an integer, or outside `0..=60`.
    pub fn decimals(&self) -> Result<Decimals> {
        match &self.decimal {
            Some(count) => count.resolve(),
            None => Err(AmountError::InvalidDecimalPlaces(format!(
                "asset '{}' has no decimal places configured",
                self.symbol
            ))),
        }
    }
}
