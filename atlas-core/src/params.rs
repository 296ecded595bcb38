//! User-tunable ranking parameters.
//!
//! Every recomputation of the ranking is a pure function of a catalog and a
//! [`RankParameters`] value; nothing is read from module-level state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CardDisplay, PriceSource, ValueSource};

/// Card used as the drop-rate baseline unless the caller picks another.
pub const DEFAULT_CARD_BASELINE: &str = "Rain of Chaos";

/// Errors raised while building ranking parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// The voidstone count exceeded the number of atlas voidstones.
    #[error("voidstones must be between 0 and {max}, got {value}")]
    VoidstonesOutOfRange {
        /// Requested count.
        value: u8,
        /// Largest accepted count.
        max: u8,
    },
    /// Price source text was not recognised.
    #[error("unknown card price source '{0}' (expected league or standard)")]
    UnknownPriceSource(String),
    /// Value source text was not recognised.
    #[error("unknown card value source '{0}' (expected map or kirac)")]
    UnknownValueSource(String),
    /// Display mode text was not recognised.
    #[error("unknown card display '{0}' (expected all, high, drop or high+drop)")]
    UnknownCardDisplay(String),
}

/// Number of atlas voidstones held, `0..=4`.
///
/// The count doubles as the index into a map's tier table.
///
/// # Examples
/// ```
/// use atlas_core::Voidstones;
///
/// assert_eq!(Voidstones::new(2).map(Voidstones::index), Ok(2));
/// assert!(Voidstones::new(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Voidstones(u8);

impl Voidstones {
    /// Largest voidstone count.
    pub const MAX: u8 = 4;

    /// Validate and wrap a voidstone count.
    pub const fn new(value: u8) -> Result<Self, ParameterError> {
        if value > Self::MAX {
            return Err(ParameterError::VoidstonesOutOfRange {
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Raw count.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index into a map's tier table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Voidstones {
    type Error = ParameterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Voidstones> for u8 {
    fn from(value: Voidstones) -> Self {
        value.0
    }
}

/// Weights and switches supplied by the user.
///
/// # Examples
/// ```
/// use atlas_core::{RankParameters, ValueSource};
///
/// let params = RankParameters {
///     card_value_source: ValueSource::Kirac,
///     ..RankParameters::default()
/// };
/// assert_eq!(params.layout_weight, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankParameters {
    /// Multiplier for the authored layout rating.
    pub layout_weight: f64,
    /// Multiplier for the authored density rating.
    pub density_weight: f64,
    /// Multiplier for the authored boss rating.
    pub boss_weight: f64,
    /// Multiplier for the summed card scores of a map.
    pub card_weight: f64,
    /// Name of the catalog card used as the drop-rate reference.
    pub card_baseline_name: String,
    /// Observed baseline drops: positive is "this many per map", negative is
    /// "one every this many maps", zero leaves the reference weight untouched.
    pub card_baseline_count: f64,
    /// Cards priced below this threshold are worth nothing.
    pub card_min_price: f64,
    /// Market the prices are read from.
    pub card_price_source: PriceSource,
    /// How card value is derived.
    pub card_value_source: ValueSource,
    /// Which cards stay visible.
    pub card_display: CardDisplay,
    /// Atlas voidstones held.
    pub voidstones: Voidstones,
}

impl Default for RankParameters {
    fn default() -> Self {
        Self {
            layout_weight: 3.0,
            density_weight: 2.0,
            boss_weight: 1.0,
            card_weight: 2.0,
            card_baseline_name: DEFAULT_CARD_BASELINE.to_owned(),
            card_baseline_count: 1.0,
            card_min_price: 10.0,
            card_price_source: PriceSource::default(),
            card_value_source: ValueSource::default(),
            card_display: CardDisplay::default(),
            voidstones: Voidstones::default(),
        }
    }
}
