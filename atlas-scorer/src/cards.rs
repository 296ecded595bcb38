//! Index of ranked maps by the cards they drop.
#![forbid(unsafe_code)]

use std::collections::HashMap;

use atlas_core::SearchQuery;

use crate::{CardSource, CardSourceMap, RatedMap};

/// Collect every distinct card with the maps it appears in.
///
/// Cards appear in the order they are first met while walking `maps`, so
/// cards dropped by high-scoring maps come first. Each card's maps are sorted
/// by map score, highest first.
#[must_use]
pub fn card_sources(maps: &[RatedMap]) -> Vec<CardSource> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut sources: Vec<CardSource> = Vec::new();
    for map in maps {
        for card in &map.cards {
            let position = *index.entry(card.name.as_str()).or_insert_with(|| {
                sources.push(CardSource {
                    name: card.name.clone(),
                    reward: card.reward.clone(),
                    stack: card.stack,
                    price: card.price,
                    unknown: card.unknown,
                    search: format!("{}\n{}", card.name, card.reward).to_lowercase(),
                    maps: Vec::new(),
                });
                sources.len().saturating_sub(1)
            });
            if let Some(source) = sources.get_mut(position) {
                source.maps.push(CardSourceMap {
                    name: map.name.clone(),
                    score: map.score,
                    weight: card.weight,
                    value: card.value,
                    hidden: card.hidden,
                });
            }
        }
    }
    for source in &mut sources {
        source.maps.sort_by(|a, b| b.score.total_cmp(&a.score));
    }
    sources
}

/// Keep card sources whose name or reward satisfies `query`.
#[must_use]
pub fn filter_cards<'a>(sources: &'a [CardSource], query: &SearchQuery) -> Vec<&'a CardSource> {
    sources
        .iter()
        .filter(|source| query.matches(&source.search))
        .collect()
}
