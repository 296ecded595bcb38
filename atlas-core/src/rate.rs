//! Human-readable drop rates.
//!
//! A rate is the expected number of copies per run. Rates of one or more read
//! as "`N` every map"; smaller rates read as "1 every `N` maps".

use std::fmt;

use serde::{Deserialize, Serialize};

const VALUE_PRECISION: f64 = 1000.0;

/// Drop frequency and the currency it earns per run.
///
/// # Examples
/// ```
/// use atlas_core::CardRate;
///
/// let rate = CardRate::from_ratio(0.1, 50.0);
/// assert_eq!((rate.per_map, rate.every_map), (1, 10));
/// assert_eq!(rate.value, 5.0);
///
/// let frequent = CardRate::from_ratio(2.6, 1.0);
/// assert_eq!((frequent.per_map, frequent.every_map), (2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRate {
    /// Copies dropped per `every_map` runs.
    pub per_map: u64,
    /// Runs needed for `per_map` copies.
    pub every_map: u64,
    /// Currency earned per run, rounded to three decimals.
    pub value: f64,
}

impl CardRate {
    /// Convert an expected-copies-per-run ratio and a unit price.
    ///
    /// Zero, negative and non-finite ratios produce an all-zero rate.
    pub fn from_ratio(rate: f64, price: f64) -> Self {
        if !rate.is_finite() || rate <= 0.0 {
            return Self::default();
        }
        let (per_map, every_map) = if rate >= 1.0 {
            (rate.floor() as u64, 1)
        } else {
            (1, (1.0 / rate).ceil() as u64)
        };
        let value = (price * rate * VALUE_PRECISION).round() / VALUE_PRECISION;
        Self {
            per_map,
            every_map,
            value: if value.is_finite() { value } else { 0.0 },
        }
    }

    /// Render the rate for a unit such as `"map"` or `"kirac mission"`.
    ///
    /// # Examples
    /// ```
    /// use atlas_core::CardRate;
    ///
    /// let rate = CardRate::from_ratio(0.25, 8.0);
    /// assert_eq!(rate.describe("map"), "1 every 4 maps (= 2 per map)");
    /// assert_eq!(CardRate::from_ratio(3.0, 1.0).describe("map"), "3 every map (= 3 per map)");
    /// ```
    pub fn describe(&self, unit: &str) -> String {
        let every = if self.every_map > 1 {
            format!("{} {unit}s", self.every_map)
        } else {
            unit.to_owned()
        };
        format!(
            "{} every {every} (= {} per {unit})",
            self.per_map, self.value
        )
    }
}

impl fmt::Display for CardRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("map"))
    }
}
