//! Resolve connected map names against the ranked collection.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use log::warn;

use crate::RatedMap;

/// Fill in each neighbour's final score and sort maps by score, highest
/// first.
///
/// Neighbours are looked up by name in `maps` itself; a name that is not
/// present scores `0.0`. Call this only once every map has its final score.
///
/// # Examples
/// ```
/// use atlas_scorer::{ConnectedMap, RatedMap, link_connected};
/// # fn rated(name: &str, score: f64, connected: &[&str]) -> RatedMap {
/// #     RatedMap {
/// #         name: name.into(),
/// #         shorthand: String::new(),
/// #         tiers: Vec::new(),
/// #         level: 0,
/// #         unique: false,
/// #         connected: connected
/// #             .iter()
/// #             .map(|n| ConnectedMap { name: (*n).into(), score: 0.0 })
/// #             .collect(),
/// #         cards: Vec::new(),
/// #         rating: Default::default(),
/// #         info: Default::default(),
/// #         boss_names: Vec::new(),
/// #         tags: Vec::new(),
/// #         search: String::new(),
/// #         value: score,
/// #         score,
/// #     }
/// # }
///
/// let maps = vec![rated("Strand", 40.0, &["Cemetery"]), rated("Cemetery", 90.0, &["Gone"])];
/// let linked = link_connected(maps);
/// assert_eq!(linked[0].name, "Cemetery");
/// assert_eq!(linked[0].connected[0].score, 0.0);
/// assert_eq!(linked[1].connected[0].score, 90.0);
/// ```
#[must_use]
pub fn link_connected(mut maps: Vec<RatedMap>) -> Vec<RatedMap> {
    let mut scores: HashMap<String, f64> = HashMap::with_capacity(maps.len());
    for map in &maps {
        scores.entry(map.name.clone()).or_insert(map.score);
    }
    for map in &mut maps {
        for neighbour in &mut map.connected {
            neighbour.score = scores.get(&neighbour.name).copied().unwrap_or_else(|| {
                warn!(
                    "map `{}` lists unknown neighbour `{}`",
                    map.name, neighbour.name
                );
                0.0
            });
        }
    }
    maps.sort_by(|a, b| b.score.total_cmp(&a.score));
    maps
}
