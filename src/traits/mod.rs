//! Core trait abstractions.
//!
//! This module defines [`AssetSource`], the seam through which the engine
//! reads per-asset decimal places from external configuration.

mod asset_source;

pub use asset_source::AssetSource;
