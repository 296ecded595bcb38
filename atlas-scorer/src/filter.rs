//! Search filtering of ranked maps and the in-game region search string.
#![forbid(unsafe_code)]

use std::collections::HashSet;

use atlas_core::SearchQuery;

use crate::RatedMap;

/// Longest region search string the game's search box accepts.
pub const REGION_SEARCH_LIMIT: usize = 50;

const QUOTE: char = '"';
const ALTERNATION: &str = "|";

/// Keep maps whose search text satisfies `query`, surfacing name matches.
///
/// Ranked order is kept within the two groups: maps whose lower-cased name
/// satisfies the query come first, then the rest.
#[must_use]
pub fn filter_maps<'a>(maps: &'a [RatedMap], query: &SearchQuery) -> Vec<&'a RatedMap> {
    let mut matched: Vec<&RatedMap> = maps
        .iter()
        .filter(|map| query.matches(&map.search))
        .collect();
    matched.sort_by_key(|map| !query.matches(&map.name.to_lowercase()));
    matched
}

/// Build a quoted, pipe-joined search string from map shorthands.
///
/// Duplicate and empty shorthands are skipped. A result longer than
/// [`REGION_SEARCH_LIMIT`] characters is cut to one character less, the last
/// (possibly partial) shorthand is dropped and the quote is closed.
///
/// # Examples
/// ```
/// use atlas_scorer::region_search;
///
/// assert_eq!(region_search(["eme", "tra", "eme"]), r#""eme|tra""#);
/// assert_eq!(region_search(Vec::<&str>::new()), r#""""#);
/// ```
#[must_use]
pub fn region_search<'a>(shorthands: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen = HashSet::new();
    let unique: Vec<&str> = shorthands
        .into_iter()
        .filter(|shorthand| !shorthand.is_empty() && seen.insert(*shorthand))
        .collect();
    let quoted = format!("{QUOTE}{}{QUOTE}", unique.join(ALTERNATION));
    if quoted.chars().count() <= REGION_SEARCH_LIMIT {
        return quoted;
    }
    let head: String = quoted
        .chars()
        .take(REGION_SEARCH_LIMIT.saturating_sub(1))
        .collect();
    let mut pieces: Vec<&str> = head.split(ALTERNATION).collect();
    pieces.pop();
    format!("{}{QUOTE}", pieces.join(ALTERNATION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::{MapInfo, MapRatings};
    use rstest::rstest;

    fn ranked(name: &str, search: &str, score: f64) -> RatedMap {
        RatedMap {
            name: name.to_owned(),
            shorthand: String::new(),
            tiers: Vec::new(),
            level: 0,
            unique: false,
            connected: Vec::new(),
            cards: Vec::new(),
            rating: MapRatings::default(),
            info: MapInfo::default(),
            boss_names: Vec::new(),
            tags: Vec::new(),
            search: search.to_owned(),
            value: score,
            score,
        }
    }

    #[rstest]
    fn name_matches_move_ahead_of_text_matches() {
        let maps = [
            ranked("Beach", "beach\nstrand", 90.0),
            ranked("Cemetery", "cemetery\nthe strand card", 80.0),
            ranked("Strand", "strand\nlinear", 50.0),
            ranked("Desert", "desert", 40.0),
            ranked("Dry Strand", "dry strand", 30.0),
        ];
        let filtered = filter_maps(&maps, &SearchQuery::parse("strand"));
        let names: Vec<&str> = filtered.iter().map(|map| map.name.as_str()).collect();
        assert_eq!(names, ["Strand", "Dry Strand", "Beach", "Cemetery"]);
    }

    #[rstest]
    fn bare_exclusion_rejects_every_map() {
        let maps = [ranked("Beach", "beach", 90.0), ranked("Strand", "strand", 50.0)];
        assert!(filter_maps(&maps, &SearchQuery::parse("-")).is_empty());
    }

    #[rstest]
    fn short_lists_are_kept_whole() {
        assert_eq!(region_search(["abc", "def"]), "\"abc|def\"");
    }

    #[rstest]
    fn long_lists_are_cut_at_a_whole_shorthand() {
        let shorthands: Vec<String> = (0..20).map(|index| format!("m{index:02}")).collect();
        let search = region_search(shorthands.iter().map(String::as_str));
        assert!(search.chars().count() <= REGION_SEARCH_LIMIT);
        assert!(search.starts_with("\"m00|"));
        assert!(search.ends_with("m11\""));
    }

    #[rstest]
    fn exactly_fifty_characters_are_kept() {
        let shorthands = ["a".repeat(23), "b".repeat(24)];
        let search = region_search(shorthands.iter().map(String::as_str));
        assert_eq!(search.chars().count(), REGION_SEARCH_LIMIT);
    }
}
