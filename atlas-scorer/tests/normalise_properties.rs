//! Property-based tests for score normalisation.
//!
//! # Invariants tested
//!
//! - **Bounds:** every score lies in `0..=scale`.
//! - **Order:** a larger value never receives a smaller score.
//! - **Top item:** the largest positive value scores exactly `scale`.
//! - **Zero safety:** all-zero input scores zero everywhere.

use atlas_scorer::{MapCard, normalise};
use proptest::prelude::*;

fn cards(values: &[f64]) -> Vec<MapCard> {
    values
        .iter()
        .map(|&value| MapCard {
            value,
            ..MapCard::default()
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn scores_stay_within_scale(
        values in proptest::collection::vec(-1.0e6_f64..1.0e6, 0..40),
        scale in 1.0_f64..1000.0,
    ) {
        for card in normalise(cards(&values), scale) {
            prop_assert!(card.score >= 0.0 && card.score <= scale);
        }
    }

    #[test]
    fn order_is_preserved(values in proptest::collection::vec(0.0_f64..1.0e6, 2..40)) {
        let scored = normalise(cards(&values), 100.0);
        for a in &scored {
            for b in &scored {
                if a.value > b.value {
                    prop_assert!(a.score >= b.score);
                }
            }
        }
    }

    #[test]
    fn maximum_scores_the_scale(values in proptest::collection::vec(0.001_f64..1.0e6, 1..40)) {
        let scored = normalise(cards(&values), 10.0);
        let top = scored.iter().map(|card| card.score).fold(0.0_f64, f64::max);
        prop_assert!((top - 10.0).abs() < 1e-9);
    }

    #[test]
    fn zero_values_score_zero(len in 0_usize..40) {
        let scored = normalise(cards(&vec![0.0; len]), 100.0);
        prop_assert!(scored.iter().all(|card| card.score == 0.0));
    }
}
