//! Conversion routines behind the engine.
//!
//! Everything here is crate-internal: callers go through
//! [`AmountEngine`](crate::engine::AmountEngine), which resolves decimal
//! places and options before delegating to these functions.
//!
//! | Routine | Direction |
//! |---------|-----------|
//! | `to_base` | parent-unit decimal → base-unit integer |
//! | `to_parent` | base-unit integer → parent-unit decimal |
//! | `format` | base-unit integer → display text |

mod coerce;
mod format;
mod parse;
mod to_base;
mod to_parent;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub(crate) use format::format;
pub(crate) use to_base::{emit, to_base};
pub(crate) use to_parent::{to_parent, RenderSettings};
