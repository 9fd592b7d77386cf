//! Process-wide cache of powers of ten.
//!
//! Scaling and rendering both need `10^d` for the asset's decimal places.
//! The cache holds one lazily-filled slot per supported count (`0..=60`).
//! Slots are written at most once and never invalidated, so concurrent
//! readers need no further synchronization.

use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::domain::{Decimals, MAX_DECIMALS};

const SLOTS: usize = MAX_DECIMALS as usize + 1;

static POW10: [OnceLock<BigUint>; SLOTS] = [const { OnceLock::new() }; SLOTS];

/// Returns `10^decimals`.
///
/// The first call for a given count computes the value; later calls return
/// the cached one.
///
/// # Examples
///
/// ```
/// use unitscale::domain::Decimals;
/// use unitscale::math::pow10;
///
/// let d = Decimals::new(3).expect("valid");
/// assert_eq!(pow10(d).to_string(), "1000");
/// ```
#[must_use]
pub fn pow10(decimals: Decimals) -> &'static BigUint {
    // `Decimals` guarantees the index is in range.
    POW10[decimals.width()].get_or_init(|| {
        tracing::trace!(decimals = decimals.get(), "filling power-of-ten cache slot");
        BigUint::from(10u8).pow(u32::from(decimals.get()))
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn dec(v: i64) -> Decimals {
        let Ok(d) = Decimals::new(v) else {
            panic!("valid decimals: {v}");
        };
        d
    }

    #[test]
    fn small_powers() {
        assert_eq!(pow10(dec(0)), &BigUint::from(1u8));
        assert_eq!(pow10(dec(1)), &BigUint::from(10u8));
        assert_eq!(pow10(dec(18)), &BigUint::from(10u64.pow(18)));
    }

    #[test]
    fn repeated_lookup_returns_same_slot() {
        let a = pow10(dec(42));
        let b = pow10(dec(42));
        assert!(core::ptr::eq(a, b));
    }

    #[test]
    fn every_slot_has_expected_digit_count() {
        for d in 0..=i64::from(MAX_DECIMALS) {
            let text = pow10(dec(d)).to_string();
            assert_eq!(text.len() as i64, d + 1);
        }
    }

    #[test]
    fn concurrent_first_use_agrees() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| pow10(dec(57)).to_string()))
            .collect();
        for h in handles {
            let Ok(text) = h.join() else {
                panic!("thread panicked");
            };
            assert_eq!(text.len(), 58);
        }
    }
}
