//! Property-based tests using `proptest` for conversion invariants.
//!
//! 1. **Round-trip**: `to_base(to_parent(b, d), d, Truncate) == b`.
//! 2. **Rounding bounds**: floor ≤ value ≤ ceil, at most one unit apart,
//!    and truncation agrees with floor for positives and ceil for negatives.
//! 3. **Grouping invariance**: removing separators gives the ungrouped text.
//! 4. **Format/render agreement**: default format bounds reproduce the
//!    trimmed rendering.

use num_bigint::BigInt;
use proptest::prelude::*;

use super::format::format;
use super::to_base::to_base;
use super::to_parent::{to_parent, RenderSettings};
use crate::domain::{AmountInput, AmountOutput, Decimals, OutputType, RoundingMode};

fn dec(v: u8) -> Decimals {
    let Ok(d) = Decimals::new(i64::from(v)) else {
        panic!("valid decimals: {v}");
    };
    d
}

fn settings(group: bool) -> RenderSettings {
    RenderSettings {
        output: OutputType::Text,
        fixed: None,
        trim: true,
        group,
        allow_unsafe: false,
    }
}

fn render(raw: &BigInt, d: Decimals, group: bool) -> String {
    match to_parent(&AmountInput::Big(raw.clone()), d, settings(group)) {
        Ok(AmountOutput::Text(t)) => t,
        other => panic!("expected text, got {other:?}"),
    }
}

fn scale(text: &str, d: Decimals, mode: RoundingMode) -> BigInt {
    let Ok(raw) = to_base(&AmountInput::from(text), d, mode) else {
        panic!("expected '{text}' to scale");
    };
    raw.into_inner()
}

/// Arbitrary signed integers well beyond `i128`.
fn big_int() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), "[0-9]{1,80}").prop_map(|(neg, digits)| {
        let Some(v) = BigInt::parse_bytes(digits.as_bytes(), 10) else {
            panic!("generated digits parse");
        };
        if neg {
            -v
        } else {
            v
        }
    })
}

proptest! {
    #[test]
    fn round_trip_i128(b in any::<i128>(), d in 0u8..=60) {
        let raw = BigInt::from(b);
        let text = render(&raw, dec(d), false);
        prop_assert_eq!(scale(&text, dec(d), RoundingMode::Truncate), raw);
    }

    #[test]
    fn round_trip_big(raw in big_int(), d in 0u8..=60) {
        let text = render(&raw, dec(d), false);
        prop_assert_eq!(scale(&text, dec(d), RoundingMode::Truncate), raw);
    }

    #[test]
    fn rounding_bounds(
        neg in any::<bool>(),
        int in "[0-9]{1,20}",
        frac in "[0-9]{0,30}",
        d in 0u8..=20,
    ) {
        let sign = if neg { "-" } else { "" };
        let text = if frac.is_empty() {
            format!("{sign}{int}")
        } else {
            format!("{sign}{int}.{frac}")
        };
        let d = dec(d);
        let floor = scale(&text, d, RoundingMode::Floor);
        let ceil = scale(&text, d, RoundingMode::Ceil);
        let trunc = scale(&text, d, RoundingMode::Truncate);
        let round = scale(&text, d, RoundingMode::Round);

        prop_assert!(floor <= ceil);
        prop_assert!(&ceil - &floor <= BigInt::from(1));
        prop_assert!(floor <= round && round <= ceil);

        let exact = frac.len() <= d.width()
            || frac[d.width()..].bytes().all(|b| b == b'0');
        prop_assert_eq!(floor == ceil, exact);

        if neg {
            prop_assert_eq!(&trunc, &ceil);
        } else {
            prop_assert_eq!(&trunc, &floor);
        }
    }

    #[test]
    fn grouping_is_presentation_only(raw in big_int(), d in 0u8..=30) {
        let grouped = render(&raw, dec(d), true);
        let plain = render(&raw, dec(d), false);
        prop_assert_eq!(grouped.replace(',', ""), plain);
    }

    #[test]
    fn default_format_matches_trimmed_render(raw in big_int(), d in 0u8..=30) {
        let d = dec(d);
        let Ok(formatted) = format(&AmountInput::Big(raw.clone()), d, 0, d.width(), false) else {
            panic!("format succeeds");
        };
        prop_assert_eq!(formatted, render(&raw, d, false));
    }
}
