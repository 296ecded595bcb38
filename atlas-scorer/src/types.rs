//! Records derived by the ranking pipeline.
#![forbid(unsafe_code)]

use atlas_core::{CardRate, DropWindow, MapInfo, MapRatings, Scored};
use serde::{Deserialize, Serialize};

/// Divide, substituting `0.0` when the result would not be finite.
#[expect(
    clippy::float_arithmetic,
    reason = "guarded division is the shared primitive for drop ratios"
)]
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        let quotient = numerator / denominator;
        if quotient.is_finite() { quotient } else { 0.0 }
    } else {
        0.0
    }
}

/// A catalog card as it drops in one map for one parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapCard {
    /// Card name.
    pub name: String,
    /// Reward text.
    pub reward: String,
    /// Art reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art: Option<String>,
    /// Price page link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ninja: Option<String>,
    /// Stack size.
    pub stack: u32,
    /// Boss-only drop.
    pub boss: bool,
    /// Area level window.
    pub drop: DropWindow,
    /// Price from the selected source.
    pub price: f64,
    /// Effective weight, `0.0` when the card cannot drop at this level.
    pub weight: f64,
    /// The catalog has no weight for this card.
    pub unknown: bool,
    /// Drop-pool weight the card competes against.
    pub map_weight: f64,
    /// Total eligible weight on the map, used for Kirac missions.
    pub kirac_weight: f64,
    /// Expected items per pool relative to the baseline card.
    pub drop_pool_items: f64,
    /// Suppressed by the display policy.
    pub hidden: bool,
    /// Expected currency per run.
    pub value: f64,
    /// Normalised value on the card scale.
    pub score: f64,
}

/// Map-drop and Kirac-mission rates for one card.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CardRates {
    /// Rate when running the map directly.
    pub map: CardRate,
    /// Rate when the map is rolled by a Kirac mission.
    pub kirac: CardRate,
}

impl MapCard {
    /// Expected copies per map run.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the map rate scales the pool share by items per pool"
    )]
    pub fn map_rate(&self) -> f64 {
        ratio(self.weight, self.map_weight) * self.drop_pool_items
    }

    /// Expected copies per Kirac mission.
    #[must_use]
    pub fn kirac_rate(&self) -> f64 {
        ratio(self.weight, self.kirac_weight)
    }

    /// Human-readable rates for both acquisition modes.
    ///
    /// # Examples
    /// ```
    /// use atlas_scorer::MapCard;
    ///
    /// let card = MapCard {
    ///     weight: 100.0,
    ///     map_weight: 2000.0,
    ///     kirac_weight: 400.0,
    ///     drop_pool_items: 2.0,
    ///     price: 40.0,
    ///     ..MapCard::default()
    /// };
    /// let rates = card.rates();
    /// assert_eq!((rates.map.per_map, rates.map.every_map), (1, 10));
    /// assert_eq!(rates.kirac.every_map, 4);
    /// ```
    #[must_use]
    pub fn rates(&self) -> CardRates {
        CardRates {
            map: CardRate::from_ratio(self.map_rate(), self.price),
            kirac: CardRate::from_ratio(self.kirac_rate(), self.price),
        }
    }
}

impl Default for MapCard {
    fn default() -> Self {
        Self {
            name: String::new(),
            reward: String::new(),
            art: None,
            ninja: None,
            stack: 1,
            boss: false,
            drop: DropWindow::default(),
            price: 0.0,
            weight: 0.0,
            unknown: true,
            map_weight: 0.0,
            kirac_weight: 0.0,
            drop_pool_items: 0.0,
            hidden: false,
            value: 0.0,
            score: 0.0,
        }
    }
}

impl Scored for MapCard {
    fn value(&self) -> f64 {
        self.value
    }

    fn with_score(self, score: f64) -> Self {
        Self { score, ..self }
    }
}

/// A neighbouring map with its final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedMap {
    /// Neighbour name.
    pub name: String,
    /// Neighbour score, `0.0` when it is not in the ranked collection.
    pub score: f64,
}

/// A map with its valued cards and composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedMap {
    /// Map name.
    pub name: String,
    /// Search-box shorthand.
    pub shorthand: String,
    /// Tier table.
    pub tiers: Vec<u32>,
    /// Area level at the selected voidstone count.
    pub level: u32,
    /// Unique map.
    pub unique: bool,
    /// Neighbours, resolved once every map is scored.
    pub connected: Vec<ConnectedMap>,
    /// Valued cards, most valuable first.
    pub cards: Vec<MapCard>,
    /// Authored ratings.
    pub rating: MapRatings,
    /// Notes backing the ratings.
    pub info: MapInfo,
    /// Boss names.
    pub boss_names: Vec<String>,
    /// Tags.
    pub tags: Vec<String>,
    /// Lower-cased search text.
    pub search: String,
    /// Weighted sum of ratings and card scores.
    pub value: f64,
    /// Normalised value on the map scale.
    pub score: f64,
}

/// Decimal places kept by [`RatedMap::card_total`].
const CARD_TOTAL_PRECISION: f64 = 100.0;

impl RatedMap {
    /// Summed card value per run, rounded to two decimals.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "rounding the summed card value to cents"
    )]
    pub fn card_total(&self) -> f64 {
        let total: f64 = self.cards.iter().map(|card| card.value).sum();
        let rounded = (total * CARD_TOTAL_PRECISION).round() / CARD_TOTAL_PRECISION;
        Self::sanitise(rounded)
    }

    /// Find a neighbour entry by name.
    #[must_use]
    pub fn neighbour(&self, name: &str) -> Option<&ConnectedMap> {
        self.connected.iter().find(|entry| entry.name == name)
    }
}

impl Scored for RatedMap {
    fn value(&self) -> f64 {
        self.value
    }

    fn with_score(self, score: f64) -> Self {
        Self { score, ..self }
    }
}

/// One map a card can be found in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSourceMap {
    /// Map name.
    pub name: String,
    /// Map score.
    pub score: f64,
    /// The card's effective weight on this map.
    pub weight: f64,
    /// The card's value on this map.
    pub value: f64,
    /// Whether the card is hidden on this map.
    pub hidden: bool,
}

/// A card with every ranked map that drops it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSource {
    /// Card name.
    pub name: String,
    /// Reward text.
    pub reward: String,
    /// Stack size.
    pub stack: u32,
    /// Price from the selected source.
    pub price: f64,
    /// The catalog has no weight for this card.
    pub unknown: bool,
    /// Lower-cased name and reward.
    pub search: String,
    /// Maps ordered by map score, highest first.
    pub maps: Vec<CardSourceMap>,
}
