//! Core domain types for the Atlas ranking engine.
//!
//! The catalog types ([`Map`], [`Card`], [`Catalog`]) mirror the static data
//! shipped with the engine. [`RankParameters`] carries the user-adjustable
//! knobs, and [`SearchQuery`] models the free-text filter applied to ranked
//! output. Validation happens at construction: [`Voidstones`] rejects counts
//! outside `0..=4` and the option enums reject unknown names.

pub mod card;
pub mod map;
pub mod options;
pub mod params;
pub mod rate;
pub mod scored;
pub mod search;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use card::{Card, DropWindow};
pub use map::{
    Catalog, CatalogConstants, Map, MapInfo, MapRatings, TIER_LEVEL_OFFSET, map_tier_to_level,
};
pub use options::{CardDisplay, PriceSource, ValueSource};
pub use params::{DEFAULT_CARD_BASELINE, ParameterError, RankParameters, Voidstones};
pub use rate::CardRate;
pub use scored::Scored;
pub use search::{SearchQuery, SearchTerm};
