//! In-memory asset spec table.

use std::collections::HashMap;

use crate::domain::AssetSpec;
use crate::traits::AssetSource;

#[cfg(feature = "serde")]
use crate::error::{AmountError, Result};

/// Mapping from asset identifier to its [`AssetSpec`].
///
/// The table is configuration supplied by the host application. Entries
/// are stored as given; their decimal counts are validated when an asset
/// is resolved, so a single broken entry never prevents the rest of the
/// table from loading.
///
/// # Examples
///
/// ```
/// use unitscale::config::AssetTable;
/// use unitscale::domain::AssetSpec;
/// use unitscale::traits::AssetSource;
///
/// let mut table = AssetTable::new();
/// table.insert("usdc", AssetSpec::new("USDC", "USD Coin", 6));
///
/// assert_eq!(table.decimals_for("usdc").map(|d| d.get()), Ok(6));
/// assert!(table.decimals_for("eth").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AssetTable {
    assets: HashMap<String, AssetSpec>,
}

impl AssetTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a table from a JSON object keyed by asset identifier.
    ///
    /// ```json
    /// { "usdc": { "symbol": "USDC", "name": "USD Coin", "decimal": 6 } }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::Generic`] if the text is not a valid table.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| AmountError::Generic(format!("invalid asset table: {e}")))
    }

    /// Inserts or replaces the entry for `asset_id`, returning the previous
    /// entry if there was one.
    pub fn insert(&mut self, asset_id: impl Into<String>, spec: AssetSpec) -> Option<AssetSpec> {
        self.assets.insert(asset_id.into(), spec)
    }

    /// Returns the entry for `asset_id`.
    #[must_use]
    pub fn get(&self, asset_id: &str) -> Option<&AssetSpec> {
        self.assets.get(asset_id)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterates over `(asset_id, spec)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetSpec)> {
        self.assets.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl AssetSource for AssetTable {
    fn asset_spec(&self, asset_id: &str) -> Option<&AssetSpec> {
        self.get(asset_id)
    }
}

impl<K: Into<String>> FromIterator<(K, AssetSpec)> for AssetTable {
    fn from_iter<I: IntoIterator<Item = (K, AssetSpec)>>(iter: I) -> Self {
        Self {
            assets: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::DecimalCount;
    use crate::error::ErrorKind;

    fn sample() -> AssetTable {
        [
            ("usdc", AssetSpec::new("USDC", "USD Coin", 6)),
            ("eth", AssetSpec::new("ETH", "Ether", 18)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn collect_and_lookup() {
        let table = sample();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.get("eth").map(|s| s.name.as_str()), Some("Ether"));
    }

    #[test]
    fn insert_replaces() {
        let mut table = sample();
        let prev = table.insert("usdc", AssetSpec::new("USDC", "USD Coin", 8));
        assert_eq!(prev.and_then(|s| s.decimal), Some(DecimalCount::Integer(6)));
        assert_eq!(table.decimals_for("usdc").map(|d| d.get()), Ok(8));
    }

    #[test]
    fn empty_table_rejects_everything() {
        let table = AssetTable::new();
        assert!(table.is_empty());
        assert_eq!(
            table.decimals_for("usdc").map_err(|e| e.kind()),
            Err(ErrorKind::InvalidDecimalPlaces)
        );
    }

    #[test]
    fn iter_visits_all_entries() {
        let table = sample();
        let mut ids: Vec<&str> = table.iter().map(|(id, _)| id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["eth", "usdc"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_json_loads_entries() {
        let json = r#"{
            "usdc": { "symbol": "USDC", "name": "USD Coin", "decimal": 6 },
            "nodec": { "symbol": "ND", "name": "No decimals" }
        }"#;
        let Ok(table) = AssetTable::from_json(json) else {
            panic!("valid table");
        };
        assert_eq!(table.len(), 2);
        assert_eq!(table.decimals_for("usdc").map(|d| d.get()), Ok(6));
        assert_eq!(
            table.decimals_for("nodec").map_err(|e| e.kind()),
            Err(ErrorKind::InvalidDecimalPlaces)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_json_keeps_entries_beside_a_bad_count() {
        let json = r#"{
            "usdc": { "symbol": "USDC", "name": "USD Coin", "decimal": 6 },
            "half": { "symbol": "HLF", "name": "Half", "decimal": 6.5 },
            "text": { "symbol": "TXT", "name": "Text", "decimal": "6" }
        }"#;
        let Ok(table) = AssetTable::from_json(json) else {
            panic!("a bad count must not fail the whole table");
        };
        assert_eq!(table.len(), 3);
        assert_eq!(table.decimals_for("usdc").map(|d| d.get()), Ok(6));
        for id in ["half", "text"] {
            assert_eq!(
                table.decimals_for(id).map_err(|e| e.kind()),
                Err(ErrorKind::InvalidDecimalPlaces)
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_json_rejects_malformed_text() {
        let Err(e) = AssetTable::from_json("[1, 2]") else {
            panic!("expected Err");
        };
        assert_eq!(e.kind(), ErrorKind::Generic);
    }
}
