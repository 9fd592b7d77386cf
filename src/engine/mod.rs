//! The public conversion surface.
//!
//! [`AmountEngine`] (and the free function [`amount`] it wraps) is the
//! single entry point: it takes an [`AmountRequest`](crate::config::AmountRequest),
//! resolves decimal places, and dispatches to the matching conversion.

mod amount_engine;
#[cfg(feature = "serde")]
mod json;

pub use amount_engine::{amount, AmountEngine};
#[cfg(feature = "serde")]
pub use json::decode_request;
