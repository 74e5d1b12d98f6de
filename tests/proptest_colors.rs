//! Property-based tests for the score color scale.

use proptest::prelude::*;
use riskboard::report::{id_color, score_color};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn score_color_never_panics(t in proptest::num::f64::ANY) {
        let _ = score_color(t);
    }

    #[test]
    fn score_color_red_channel_is_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (r_lo, _, _) = score_color(lo);
        let (r_hi, _, _) = score_color(hi);
        prop_assert!(r_lo <= r_hi, "red channel must not decrease: {lo} -> {r_lo}, {hi} -> {r_hi}");
    }

    #[test]
    fn score_color_blue_channel_stays_zero(t in 0.0f64..=1.0) {
        let (_, _, b) = score_color(t);
        prop_assert_eq!(b, 0, "scale runs green/yellow/red, no blue component");
    }

    #[test]
    fn id_color_cycles(index in 0usize..1000) {
        prop_assert_eq!(id_color(index), id_color(index + 10));
    }
}
