//! Facade crate for the Atlas map ranking engine.
//!
//! This crate re-exports the catalog types from `atlas-core` and the ranking
//! pipeline from `atlas-scorer`, so callers can depend on a single crate.

#![forbid(unsafe_code)]

pub use atlas_core::{
    Card, CardDisplay, CardRate, Catalog, CatalogConstants, DEFAULT_CARD_BASELINE, DropWindow,
    Map, MapInfo, MapRatings, ParameterError, PriceSource, RankParameters, Scored, SearchQuery,
    SearchTerm, ValueSource, Voidstones, map_tier_to_level,
};

pub use atlas_scorer::{
    CARD_SCORE_SCALE, CardRates, CardSource, CardSourceMap, ConnectedMap, MAP_SCORE_SCALE,
    MapCard, REGION_SEARCH_LIMIT, RankError, RatedMap, card_sources, card_weight_baseline,
    filter_cards, filter_maps, link_connected, normalise, rate_maps, region_search,
};

#[cfg(feature = "test-support")]
pub use atlas_core::test_support;
