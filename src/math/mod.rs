//! Arithmetic and text helpers shared by the conversion routines.
//!
//! This module provides the process-wide [`pow10`] cache, the rounding
//! [`carry`] decision, thousands grouping, and the safe-numeric guard used
//! whenever a result is handed out as `f64`.

mod grouping;
mod pow10;
mod rounding;
mod safe_number;

pub use grouping::{group_thousands, GROUP_SEPARATOR};
pub use pow10::pow10;
pub use rounding::carry;
pub use safe_number::{
    digit_count, is_safe_number, to_f64_guarded, MAX_SAFE_DIGITS, MAX_SAFE_INTEGER,
};
