//! Ranking pipeline for Atlas maps and divination cards.
//!
//! [`rate_maps`] is a pure function of a [`Catalog`] and
//! [`RankParameters`]. It runs these stages in order:
//! - **Drop weights**: each card's effective weight on each map, the map and
//!   boss pool weights, and the items expected per pool relative to a
//!   baseline card.
//! - **Card values**: expected currency per run, subject to the minimum price
//!   and the display filter.
//! - **Card scores**: every card of every map normalised together onto
//!   `0..=10`.
//! - **Map scores**: weighted ratings plus weighted card scores, normalised
//!   onto `0..=100`.
//! - **Neighbours**: connected map names resolved to their final scores,
//!   then the whole list sorted by score.
//!
//! [`filter_maps`], [`region_search`] and [`card_sources`] derive views from
//! the ranked list.
//!
//! # Examples
//!
//! ```
//! use atlas_core::{Card, Catalog, Map, RankParameters};
//! use atlas_scorer::rate_maps;
//!
//! let rain = Card::new("Rain of Chaos").with_weight(1000.0).with_price(1.0);
//! let catalog = Catalog {
//!     maps: vec![Map {
//!         tiers: vec![1, 2, 3, 4, 5],
//!         cards: vec![rain.clone()],
//!         ..Map::new("Strand")
//!     }],
//!     cards: vec![rain],
//!     ..Catalog::default()
//! };
//! let ranked = rate_maps(&catalog, &RankParameters::default()).expect("rank maps");
//! assert_eq!(ranked.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use atlas_core::{Catalog, RankParameters, Scored};
use log::debug;

mod cards;
mod error;
mod filter;
mod link;
pub(crate) mod resolver;
mod types;
mod value;

pub use cards::{card_sources, filter_cards};
pub use error::RankError;
pub use filter::{REGION_SEARCH_LIMIT, filter_maps, region_search};
pub use link::link_connected;
pub use resolver::card_weight_baseline;
pub use types::{CardRates, CardSource, CardSourceMap, ConnectedMap, MapCard, RatedMap};

use resolver::resolve_map_cards;
use value::{sort_cards, value_cards};

/// Upper bound of a card score.
pub const CARD_SCORE_SCALE: f64 = 10.0;

/// Upper bound of a map score.
pub const MAP_SCORE_SCALE: f64 = 100.0;

/// Rescale values onto `0..=scale`, preserving their order.
///
/// The item with the largest value scores exactly `scale`. When no value is
/// positive every item scores `0.0`. Non-finite values count as `0.0`.
///
/// # Examples
/// ```
/// use atlas_scorer::{MapCard, normalise};
///
/// let cards = vec![
///     MapCard { value: 4.0, ..MapCard::default() },
///     MapCard { value: 1.0, ..MapCard::default() },
/// ];
/// let scored = normalise(cards, 10.0);
/// let scores: Vec<f64> = scored.iter().map(|card| card.score).collect();
/// assert_eq!(scores, [10.0, 2.5]);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "normalising divides each value by the maximum"
)]
pub fn normalise<T: Scored>(items: Vec<T>, scale: f64) -> Vec<T> {
    let bound = T::sanitise(scale).max(0.0);
    let max = items
        .iter()
        .map(|item| T::sanitise(item.value()))
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return items.into_iter().map(|item| item.with_score(0.0)).collect();
    }
    items
        .into_iter()
        .map(|item| {
            let share = T::sanitise(item.value()) / max;
            let score = (share * bound).clamp(0.0, bound);
            item.with_score(score)
        })
        .collect()
}

fn check_finite(value: f64, field: &'static str) -> Result<(), RankError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RankError::NonFiniteParameter { field })
    }
}

fn check_parameters(params: &RankParameters) -> Result<(), RankError> {
    check_finite(params.layout_weight, "layoutWeight")?;
    check_finite(params.density_weight, "densityWeight")?;
    check_finite(params.boss_weight, "bossWeight")?;
    check_finite(params.card_weight, "cardWeight")?;
    check_finite(params.card_min_price, "cardMinPrice")
}

/// Value every card of every map, without scores.
fn value_maps(catalog: &Catalog, params: &RankParameters, baseline: f64) -> Vec<RatedMap> {
    catalog
        .maps
        .iter()
        .map(|map| {
            let mut cards = resolve_map_cards(map, catalog, params, baseline);
            value_cards(&mut cards, map.unique, params);
            sort_cards(&mut cards);
            RatedMap {
                name: map.name.clone(),
                shorthand: map.shorthand.clone(),
                tiers: map.tiers.clone(),
                level: map.level(params.voidstones),
                unique: map.unique,
                connected: map
                    .connected
                    .iter()
                    .map(|name| ConnectedMap {
                        name: name.clone(),
                        score: 0.0,
                    })
                    .collect(),
                cards,
                rating: map.rating,
                info: map.info.clone(),
                boss_names: map.boss_names.clone(),
                tags: map.tags.clone(),
                search: map.search_text(),
                value: 0.0,
                score: 0.0,
            }
        })
        .collect()
}

/// Normalise all cards of all maps together, keeping each map's card order.
fn score_cards(maps: &mut [RatedMap]) {
    let counts: Vec<usize> = maps.iter().map(|map| map.cards.len()).collect();
    let pooled: Vec<MapCard> = maps
        .iter_mut()
        .flat_map(|map| std::mem::take(&mut map.cards))
        .collect();
    let mut scored = normalise(pooled, CARD_SCORE_SCALE).into_iter();
    for (map, count) in maps.iter_mut().zip(counts) {
        map.cards = scored.by_ref().take(count).collect();
    }
}

/// Weighted sum of a map's ratings and its cards' scores.
#[expect(
    clippy::float_arithmetic,
    reason = "the map value is a weighted linear combination"
)]
fn aggregate_value(map: &RatedMap, params: &RankParameters) -> f64 {
    let layout = map.rating.layout.unwrap_or(0.0) * params.layout_weight;
    let density = map.rating.density.unwrap_or(0.0) * params.density_weight;
    let boss = map.rating.boss.unwrap_or(0.0) * params.boss_weight;
    let cards: f64 = map
        .cards
        .iter()
        .map(|card| card.score * params.card_weight)
        .sum();
    RatedMap::sanitise(layout + density + boss + cards)
}

/// Rank every catalog map for the given parameters.
///
/// The result is sorted by map score, highest first. The catalog is never
/// mutated.
///
/// # Errors
/// Returns [`RankError`] when the baseline card cannot be resolved or a
/// numeric parameter is not finite.
pub fn rate_maps(catalog: &Catalog, params: &RankParameters) -> Result<Vec<RatedMap>, RankError> {
    check_parameters(params)?;
    let baseline = card_weight_baseline(catalog, params)?;
    debug!(
        "card weight baseline {baseline} from `{}`",
        params.card_baseline_name
    );

    let mut maps = value_maps(catalog, params, baseline);
    score_cards(&mut maps);
    let valued: Vec<RatedMap> = maps
        .into_iter()
        .map(|map| {
            let value = aggregate_value(&map, params);
            RatedMap { value, ..map }
        })
        .collect();
    let ranked = link_connected(normalise(valued, MAP_SCORE_SCALE));
    debug!(
        "rated {} maps with {} cards",
        ranked.len(),
        ranked.iter().map(|map| map.cards.len()).sum::<usize>()
    );
    Ok(ranked)
}
