//! # unitscale
//!
//! Lossless fixed-point conversion between human-facing "parent unit"
//! decimal text (`"12.345678"`) and integer "base unit" amounts
//! (`12345678` at 6 decimal places), per asset.
//!
//! The engine is pure and synchronous: no I/O, no global mutable state
//! beyond an append-only power-of-ten cache, no floating-point arithmetic on
//! the exact path, and no panics. Every failure comes back as a typed
//! [`AmountError`](error::AmountError) carrying an
//! [`ErrorKind`](error::ErrorKind).
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | yes | Serde derives, JSON asset tables and JSON requests |
//!
//! # Quick Start
//!
//! ```rust
//! use unitscale::config::{AssetTable, FormatOptions, ToBaseOptions, ToParentOptions};
//! use unitscale::domain::{AmountOutput, AssetSpec, OutputType, RoundingMode};
//! use unitscale::engine::AmountEngine;
//!
//! // 1. Describe the assets
//! let mut assets = AssetTable::new();
//! assets.insert("usdc", AssetSpec::new("USDC", "USD Coin", 6));
//! let engine = AmountEngine::new(assets);
//!
//! // 2. Parent units -> base units
//! let base = engine
//!     .to_base("1234.5678915", ToBaseOptions::for_asset("usdc").rounding(RoundingMode::Round))
//!     .expect("valid amount");
//! assert_eq!(base.to_string(), "1234567892");
//!
//! // 3. Base units -> parent units
//! let parent = engine
//!     .to_parent(1_234_567_892, ToParentOptions::for_asset("usdc").group(true))
//!     .expect("valid amount");
//! assert_eq!(parent, AmountOutput::Text("1,234.567892".into()));
//!
//! // 4. Display formatting
//! let shown = engine
//!     .format(1_234_567_892, FormatOptions::for_asset("usdc").max_fraction_digits(2))
//!     .expect("valid amount");
//! assert_eq!(shown, "1,234.56");
//!
//! // Failures are values, not panics
//! let err = engine
//!     .to_base("12a.3", ToBaseOptions::with_decimals(2).output(OutputType::Text))
//!     .unwrap_err();
//! assert_eq!(err.kind().code(), "INVALID_DECIMAL");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer   │  builds AmountRequest / calls AmountEngine
//! └──────┬───────┘
//!        │ execute(&request)
//!        ▼
//! ┌──────────────┐
//! │    Engine    │  resolves Decimals (explicit or via AssetSource), dispatches
//! └──────┬───────┘
//!        │ exhaustive match on AmountRequest
//!        ▼
//! ┌──────────────┐
//! │   Convert    │  to_base, to_parent, format, strict coercion
//! └──────┬───────┘
//!        │ pow10 cache, carry, grouping, safe-numeric guard
//!        ▼
//! ┌──────────────┐
//! │ Domain/Math  │  Decimals, RoundingMode, ScaledInteger, ...
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Decimals`](domain::Decimals), [`RoundingMode`](domain::RoundingMode), [`ScaledInteger`](domain::ScaledInteger), inputs and outputs |
//! | [`config`] | [`AmountRequest`](config::AmountRequest), option structs, [`AssetTable`](config::AssetTable) |
//! | [`traits`] | [`AssetSource`](traits::AssetSource) lookup seam |
//! | [`engine`] | [`AmountEngine`](engine::AmountEngine) and [`amount`](engine::amount) dispatch |
//! | [`math`] | Power-of-ten cache, rounding carry, grouping, safe-numeric guard |
//! | [`error`] | [`AmountError`](error::AmountError) and [`ErrorKind`](error::ErrorKind) |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
mod convert;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod prelude;
pub mod traits;
