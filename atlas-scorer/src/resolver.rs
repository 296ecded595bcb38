//! Resolve per-map drop weights and drop-pool figures for each card.
#![forbid(unsafe_code)]

use atlas_core::{Card, Catalog, Map, RankParameters, map_tier_to_level};
use log::warn;

use crate::types::ratio;
use crate::{MapCard, RankError};

/// Boss pools yield a tenth of the items a map pool does.
const BOSS_POOL_DIVISOR: f64 = 10.0;

/// Reference weight a card is compared with to estimate drops per pool.
///
/// The baseline card's weight is divided by a positive `card_baseline_count`
/// ("this many drop per map") or multiplied by the magnitude of a negative one
/// ("one drops every this many maps").
///
/// # Errors
/// Returns [`RankError::UnknownBaselineCard`] when the name is not in the
/// catalog, [`RankError::BaselineWithoutWeight`] when the card has no usable
/// weight and [`RankError::NonFiniteParameter`] when the count is not finite.
///
/// # Examples
/// ```
/// use atlas_core::{Card, Catalog, RankParameters};
/// use atlas_scorer::card_weight_baseline;
///
/// let catalog = Catalog {
///     cards: vec![Card::new("Rain of Chaos").with_weight(1000.0)],
///     ..Catalog::default()
/// };
/// let params = RankParameters {
///     card_baseline_count: 2.0,
///     ..RankParameters::default()
/// };
/// assert_eq!(card_weight_baseline(&catalog, &params), Ok(500.0));
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the baseline scales a catalog weight by the observed count"
)]
pub fn card_weight_baseline(catalog: &Catalog, params: &RankParameters) -> Result<f64, RankError> {
    let name = params.card_baseline_name.as_str();
    let card = catalog
        .card(name)
        .ok_or_else(|| RankError::UnknownBaselineCard {
            name: name.to_owned(),
        })?;
    if !card.has_known_weight() {
        return Err(RankError::BaselineWithoutWeight {
            name: name.to_owned(),
        });
    }
    let count = params.card_baseline_count;
    if !count.is_finite() {
        return Err(RankError::NonFiniteParameter {
            field: "cardBaselineCount",
        });
    }
    let weight = card.catalog_weight();
    Ok(if count > 0.0 {
        weight / count
    } else if count < 0.0 {
        weight * count.abs()
    } else {
        weight
    })
}

/// Running weight sums across one map's cards.
#[derive(Debug, Default, Clone, Copy)]
struct PoolWeights {
    /// Every eligible card.
    boss: f64,
    /// Eligible cards that are not boss-only.
    map: f64,
}

impl PoolWeights {
    #[expect(clippy::float_arithmetic, reason = "accumulating drop weights")]
    fn add(&mut self, card: &Card, weight: f64) {
        self.boss += weight;
        if !card.boss {
            self.map += weight;
        }
    }
}

/// Derive the [`MapCard`] list for one map without valuing the cards.
///
/// A card's effective weight is its catalog weight when the map's level at
/// the selected voidstone count lies inside the card's drop window, `0.0`
/// otherwise. A map without a tier at the selected voidstone count drops
/// nothing.
#[expect(
    clippy::float_arithmetic,
    reason = "drop-pool weights offset the catalog constant and divide the baseline"
)]
pub(crate) fn resolve_map_cards(
    map: &Map,
    catalog: &Catalog,
    params: &RankParameters,
    baseline: f64,
) -> Vec<MapCard> {
    let level = map.tier(params.voidstones).map(map_tier_to_level);
    if map.tiers.is_empty() {
        warn!("map `{}` has no tier table; no card can drop", map.name);
    } else if level.is_none() {
        warn!(
            "map `{}` has no tier for {} voidstones; no card can drop",
            map.name,
            params.voidstones.get()
        );
    }

    let mut pools = PoolWeights::default();
    let mut cards: Vec<MapCard> = map
        .cards
        .iter()
        .map(|card| {
            let eligible = level.is_some_and(|value| card.drop.contains(value));
            let weight = if eligible { card.catalog_weight() } else { 0.0 };
            pools.add(card, weight);
            MapCard {
                name: card.name.clone(),
                reward: card.reward.clone(),
                art: card.art.clone(),
                ninja: card.ninja.clone(),
                stack: card.stack,
                boss: card.boss,
                drop: card.drop,
                price: card.price_for(params.card_price_source),
                weight,
                unknown: !card.has_known_weight(),
                ..MapCard::default()
            }
        })
        .collect();

    let droppool = catalog.constants.droppool_weight;
    for card in &mut cards {
        let own_pool = if card.boss { pools.boss } else { pools.map };
        card.map_weight = droppool + own_pool;
        card.kirac_weight = pools.boss;
        let items = ratio(card.map_weight, baseline);
        card.drop_pool_items = if card.boss {
            items / BOSS_POOL_DIVISOR
        } else {
            items
        };
    }
    cards
}
