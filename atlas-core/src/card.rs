//! Divination card records as they appear in the static catalog.

use serde::{Deserialize, Serialize};

use crate::PriceSource;

const DEFAULT_MIN_LEVEL: u32 = 0;
const DEFAULT_MAX_LEVEL: u32 = 99;

/// Area level window in which a card can drop.
///
/// Missing bounds fall back to `0` and `99`. A zero upper bound is treated as
/// missing, matching how the catalog encodes "no limit".
///
/// # Examples
/// ```
/// use atlas_core::DropWindow;
///
/// let window = DropWindow::new(Some(70), None);
/// assert!(!window.contains(69));
/// assert!(window.contains(83));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DropWindow {
    /// Lowest area level that can drop the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_level: Option<u32>,
    /// Highest area level that can drop the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_level: Option<u32>,
}

impl DropWindow {
    /// Construct a window from optional bounds.
    pub const fn new(min_level: Option<u32>, max_level: Option<u32>) -> Self {
        Self {
            min_level,
            max_level,
        }
    }

    /// Effective lower bound.
    pub fn min_level(&self) -> u32 {
        self.min_level.unwrap_or(DEFAULT_MIN_LEVEL)
    }

    /// Effective upper bound.
    pub fn max_level(&self) -> u32 {
        self.max_level
            .filter(|&level| level > 0)
            .unwrap_or(DEFAULT_MAX_LEVEL)
    }

    /// Report whether `level` lies inside the inclusive window.
    pub fn contains(&self, level: u32) -> bool {
        (self.min_level()..=self.max_level()).contains(&level)
    }
}

/// A collectible card with its drop weight and market prices.
///
/// `weight` is the relative drop weight from the community weight tables.
/// A missing or zero weight means the card's drop rate is unknown.
///
/// # Examples
/// ```
/// use atlas_core::{Card, PriceSource};
///
/// let card = Card::new("The Doctor")
///     .with_weight(12.0)
///     .with_price(900.0)
///     .with_standard_price(1200.0);
/// assert!(card.has_known_weight());
/// assert_eq!(card.price_for(PriceSource::Standard), 1200.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Display name, unique within the catalog.
    pub name: String,
    /// Reward text shown on the card.
    #[serde(default)]
    pub reward: String,
    /// Art reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art: Option<String>,
    /// Price page link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ninja: Option<String>,
    /// Number of cards needed for a full set.
    #[serde(default = "default_stack")]
    pub stack: u32,
    /// Relative drop weight.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Price in the current league.
    #[serde(default)]
    pub price: Option<f64>,
    /// Price in the permanent league.
    #[serde(default)]
    pub standard_price: Option<f64>,
    /// Whether the card only drops from the map boss.
    #[serde(default)]
    pub boss: bool,
    /// Area level window.
    #[serde(default)]
    pub drop: DropWindow,
}

const fn default_stack() -> u32 {
    1
}

impl Card {
    /// Construct a card with a stack size of one and no weight or prices.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reward: String::new(),
            art: None,
            ninja: None,
            stack: default_stack(),
            weight: None,
            price: None,
            standard_price: None,
            boss: false,
            drop: DropWindow::default(),
        }
    }

    /// Set the reward text.
    #[must_use]
    pub fn with_reward(mut self, reward: impl Into<String>) -> Self {
        self.reward = reward.into();
        self
    }

    /// Set the stack size.
    #[must_use]
    pub fn with_stack(mut self, stack: u32) -> Self {
        self.stack = stack;
        self
    }

    /// Set the catalog drop weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the league price.
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the standard price.
    #[must_use]
    pub fn with_standard_price(mut self, price: f64) -> Self {
        self.standard_price = Some(price);
        self
    }

    /// Mark the card as a boss drop.
    #[must_use]
    pub fn with_boss(mut self, boss: bool) -> Self {
        self.boss = boss;
        self
    }

    /// Restrict the area levels that can drop the card.
    #[must_use]
    pub fn with_drop(mut self, drop: DropWindow) -> Self {
        self.drop = drop;
        self
    }

    /// Catalog weight, or `0.0` when unknown, negative or non-finite.
    pub fn catalog_weight(&self) -> f64 {
        self.weight
            .filter(|weight| weight.is_finite() && *weight > 0.0)
            .unwrap_or(0.0)
    }

    /// Report whether the catalog records a usable drop weight.
    pub fn has_known_weight(&self) -> bool {
        self.catalog_weight() > 0.0
    }

    /// Price from the requested source, `0.0` when absent.
    pub fn price_for(&self, source: PriceSource) -> f64 {
        let price = match source {
            PriceSource::League => self.price,
            PriceSource::Standard => self.standard_price,
        };
        price.filter(|value| value.is_finite()).unwrap_or(0.0)
    }
}
