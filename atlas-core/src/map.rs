//! Map records and the static catalog they live in.

use serde::{Deserialize, Serialize};

use crate::{Card, Voidstones};

/// Difference between a map tier and its area level (tier 1 is level 68).
pub const TIER_LEVEL_OFFSET: u32 = 67;

/// Separator between the fields of a map's search text.
const SEARCH_SEPARATOR: &str = "\n";

/// Convert a map tier to its monster level.
///
/// # Examples
/// ```
/// use atlas_core::map_tier_to_level;
///
/// assert_eq!(map_tier_to_level(1), 68);
/// assert_eq!(map_tier_to_level(16), 83);
/// ```
pub const fn map_tier_to_level(tier: u32) -> u32 {
    tier.saturating_add(TIER_LEVEL_OFFSET)
}

/// Authored `0..=10` ratings for a map.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapRatings {
    /// How pleasant the layout is to clear.
    #[serde(default)]
    pub layout: Option<f64>,
    /// Monster density.
    #[serde(default)]
    pub density: Option<f64>,
    /// How easy the boss is.
    #[serde(default)]
    pub boss: Option<f64>,
}

/// Free-text notes explaining each rating.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MapInfo {
    /// Layout notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Density notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<String>,
    /// Boss notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boss: Option<String>,
}

/// A map as described by the static catalog.
///
/// `connected` lists neighbouring maps by name; it is a lookup key into the
/// same catalog, never an owning reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    /// Display name, unique within the catalog.
    pub name: String,
    /// Short unique fragment used in the in-game search box.
    #[serde(default)]
    pub shorthand: String,
    /// Tier for each voidstone count, indexed `0..=4`.
    #[serde(default)]
    pub tiers: Vec<u32>,
    /// Unique maps cannot be rolled by Kirac missions.
    #[serde(default)]
    pub unique: bool,
    /// Names of adjacent atlas maps.
    #[serde(default)]
    pub connected: Vec<String>,
    /// Cards that can drop in this map.
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Authored ratings.
    #[serde(default)]
    pub rating: MapRatings,
    /// Notes backing the ratings.
    #[serde(default)]
    pub info: MapInfo,
    /// Boss names.
    #[serde(default)]
    pub boss_names: Vec<String>,
    /// Free-form tags (layout style, boss mechanics, ...).
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Map {
    /// Construct an empty map with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shorthand: String::new(),
            tiers: Vec::new(),
            unique: false,
            connected: Vec::new(),
            cards: Vec::new(),
            rating: MapRatings::default(),
            info: MapInfo::default(),
            boss_names: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Tier at the given voidstone count.
    ///
    /// Returns `None` when the voidstone count indexes past the tier table,
    /// has no tiers at all.
    pub fn tier(&self, voidstones: Voidstones) -> Option<u32> {
        self.tiers
            .get(voidstones.index())
            .copied()
    }

    /// Area level at the given voidstone count, `0` without a tier table.
    pub fn level(&self, voidstones: Voidstones) -> u32 {
        self.tier(voidstones).map_or(0, map_tier_to_level)
    }

    /// Lower-cased text a search query is matched against: the name, tags,
    /// and every card's name and reward.
    ///
    /// # Examples
    /// ```
    /// use atlas_core::{Card, Map};
    ///
    /// let mut map = Map::new("Cemetery");
    /// map.tags.push("Linear".into());
    /// map.cards.push(Card::new("The Union").with_reward("Gemcutter's Prism"));
    /// let text = map.search_text();
    /// assert!(text.contains("linear"));
    /// assert!(text.contains("gemcutter"));
    /// ```
    pub fn search_text(&self) -> String {
        let cards = self
            .cards
            .iter()
            .flat_map(|card| [card.name.as_str(), card.reward.as_str()]);
        std::iter::once(self.name.as_str())
            .chain(self.tags.iter().map(String::as_str))
            .chain(cards)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(SEARCH_SEPARATOR)
            .to_lowercase()
    }
}

/// Constants shipped alongside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogConstants {
    /// Weight of the generic drop pool every card competes against.
    #[serde(default)]
    pub droppool_weight: f64,
}

/// Immutable static data the ranking runs over.
///
/// # Examples
/// ```
/// use atlas_core::{Card, Catalog};
///
/// let catalog = Catalog {
///     cards: vec![Card::new("Rain of Chaos").with_weight(121_400.0)],
///     ..Catalog::default()
/// };
/// assert!(catalog.card("Rain of Chaos").is_some());
/// assert!(catalog.card("rain of chaos").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Maps in catalog order.
    #[serde(default)]
    pub maps: Vec<Map>,
    /// Every known card.
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Global constants.
    #[serde(default)]
    pub constants: CatalogConstants,
}

impl Catalog {
    /// Find a card by exact name.
    pub fn card(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.name == name)
    }
}
