//! Test-only catalog fixtures shared by unit, behaviour and benchmark code.

use crate::{Card, Catalog, CatalogConstants, DropWindow, Map, MapRatings};

/// Reference card present in every sample catalog.
pub const BASELINE_CARD: &str = "Rain of Chaos";

/// Drop-pool constant used by the sample catalog.
pub const SAMPLE_DROPPOOL_WEIGHT: f64 = 1000.0;

/// Small deterministic catalog with three connected maps.
///
/// - `Cemetery` (tiers 3..16) drops the baseline card, a mid-value card and a
///   boss-only card gated to level 80+.
/// - `Strand` (tiers 1..14) drops a high-value card and one card with no known
///   weight.
/// - `Maelström of Chaos` is unique and lists a neighbour missing from the
///   catalog.
#[derive(Debug, Clone)]
pub struct SampleCatalog;

impl SampleCatalog {
    /// Baseline card with a round weight.
    pub fn baseline() -> Card {
        Card::new(BASELINE_CARD)
            .with_reward("Chaos Orb")
            .with_stack(8)
            .with_weight(1000.0)
            .with_price(1.0)
            .with_standard_price(1.0)
    }

    /// Mid-value card.
    pub fn union() -> Card {
        Card::new("The Union")
            .with_reward("Gemcutter's Prism")
            .with_stack(5)
            .with_weight(200.0)
            .with_price(20.0)
            .with_standard_price(12.0)
    }

    /// Boss-only card restricted to level 80 and above.
    pub fn doctor() -> Card {
        Card::new("The Doctor")
            .with_reward("Headhunter")
            .with_stack(8)
            .with_weight(10.0)
            .with_price(800.0)
            .with_standard_price(900.0)
            .with_boss(true)
            .with_drop(DropWindow::new(Some(80), None))
    }

    /// High-value card.
    pub fn apothecary() -> Card {
        Card::new("The Apothecary")
            .with_reward("Mageblood")
            .with_stack(13)
            .with_weight(5.0)
            .with_price(2000.0)
            .with_standard_price(2500.0)
    }

    /// Card whose drop weight is not recorded.
    pub fn mystery() -> Card {
        Card::new("The Mystery")
            .with_reward("Unknown Unique")
            .with_price(50.0)
    }

    /// Build the catalog.
    pub fn build() -> Catalog {
        let cemetery = Map {
            shorthand: "eme".to_owned(),
            tiers: vec![3, 8, 12, 14, 16],
            connected: vec!["Strand".to_owned()],
            cards: vec![Self::baseline(), Self::union(), Self::doctor()],
            rating: MapRatings {
                layout: Some(8.0),
                density: Some(6.0),
                boss: Some(7.0),
            },
            tags: vec!["linear".to_owned()],
            boss_names: vec!["Consort of the Dead".to_owned()],
            ..Map::new("Cemetery")
        };
        let strand = Map {
            shorthand: "tra".to_owned(),
            tiers: vec![1, 6, 10, 12, 14],
            connected: vec!["Cemetery".to_owned(), "Maelström of Chaos".to_owned()],
            cards: vec![Self::apothecary(), Self::mystery()],
            rating: MapRatings {
                layout: Some(10.0),
                density: Some(7.0),
                boss: Some(9.0),
            },
            tags: vec!["linear".to_owned(), "open".to_owned()],
            ..Map::new("Strand")
        };
        let maelstrom = Map {
            shorthand: "mae".to_owned(),
            tiers: vec![5, 5, 5, 5, 5],
            unique: true,
            connected: vec!["Strand".to_owned(), "Lost Isles".to_owned()],
            cards: vec![Self::union()],
            rating: MapRatings {
                layout: Some(4.0),
                density: None,
                boss: Some(2.0),
            },
            tags: vec!["unique".to_owned()],
            ..Map::new("Maelström of Chaos")
        };

        Catalog {
            maps: vec![cemetery, strand, maelstrom],
            cards: vec![
                Self::baseline(),
                Self::union(),
                Self::doctor(),
                Self::apothecary(),
                Self::mystery(),
            ],
            constants: CatalogConstants {
                droppool_weight: SAMPLE_DROPPOOL_WEIGHT,
            },
        }
    }
}
