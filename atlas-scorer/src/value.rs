//! Card valuation and per-map card ordering.
#![forbid(unsafe_code)]

use std::cmp::Ordering;

use atlas_core::{RankParameters, Scored, ValueSource};

use crate::MapCard;
use crate::types::ratio;

/// Assign `value` and `hidden` to every card of one map.
///
/// Cards with an unknown catalog weight are never hidden. Hidden and
/// under-priced cards are worth nothing. In Kirac mode unique maps are worth
/// nothing because missions never roll them.
#[expect(
    clippy::float_arithmetic,
    reason = "card value multiplies price by the expected drop share"
)]
pub(crate) fn value_cards(cards: &mut [MapCard], unique: bool, params: &RankParameters) {
    for card in cards.iter_mut() {
        let drop_eligible = card.weight > 0.0;
        let price_eligible = card.price >= params.card_min_price;
        card.hidden = !card.unknown && params.card_display.hides(drop_eligible, price_eligible);
        if card.hidden || !price_eligible {
            card.value = 0.0;
            continue;
        }
        let value = match params.card_value_source {
            ValueSource::Kirac if unique => 0.0,
            ValueSource::Kirac => {
                f64::from(card.stack) * card.price * ratio(card.weight, card.kirac_weight)
            }
            ValueSource::Map => card.price * ratio(card.weight, card.map_weight) * card.drop_pool_items,
        };
        card.value = MapCard::sanitise(value);
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Order cards by price, then stably by value, both highest first.
///
/// The two passes are deliberate: equal values keep their price order.
pub(crate) fn sort_cards(cards: &mut [MapCard]) {
    cards.sort_by(|a, b| descending(a.price, b.price));
    cards.sort_by(|a, b| descending(a.value, b.value));
}
