//! Closed sets of user choices that steer card valuation.
//!
//! Each enum round-trips through the lowercase names used by the catalog
//! tooling and the command line.
//!
//! # Examples
//! ```
//! use atlas_core::{CardDisplay, PriceSource};
//!
//! assert_eq!(PriceSource::Standard.as_str(), "standard");
//! assert_eq!("high+drop".parse::<CardDisplay>(), Ok(CardDisplay::HighAndDrop));
//! ```

use serde::{Deserialize, Serialize};

use crate::ParameterError;

/// Which market the card prices are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    /// Prices from the current challenge league.
    #[default]
    League,
    /// Prices from the permanent standard league.
    Standard,
}

impl PriceSource {
    /// Return the source as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::League => "league",
            Self::Standard => "standard",
        }
    }
}

impl std::fmt::Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PriceSource {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "league" => Ok(Self::League),
            "standard" => Ok(Self::Standard),
            _ => Err(ParameterError::UnknownPriceSource(s.to_owned())),
        }
    }
}

/// How a card's economic value is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// Expected value from cards dropping while running the map.
    #[default]
    Map,
    /// Expected value from the map's Kirac mission reward pool.
    Kirac,
}

impl ValueSource {
    /// Return the source as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Kirac => "kirac",
        }
    }
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ValueSource {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "map" => Ok(Self::Map),
            "kirac" => Ok(Self::Kirac),
            _ => Err(ParameterError::UnknownValueSource(s.to_owned())),
        }
    }
}

/// Which cards stay visible (and valued) on each map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CardDisplay {
    /// Every card is shown.
    #[default]
    #[serde(rename = "all")]
    All,
    /// Only cards priced at or above the minimum price.
    #[serde(rename = "high")]
    High,
    /// Only cards that can drop at the current map level.
    #[serde(rename = "drop")]
    Drop,
    /// Only cards that are both high value and droppable.
    #[serde(rename = "high+drop")]
    HighAndDrop,
}

impl CardDisplay {
    /// Return the display mode as used on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::High => "high",
            Self::Drop => "drop",
            Self::HighAndDrop => "high+drop",
        }
    }

    /// Decide whether a card with the given eligibility is hidden.
    ///
    /// # Examples
    /// ```
    /// use atlas_core::CardDisplay;
    ///
    /// assert!(CardDisplay::High.hides(true, false));
    /// assert!(!CardDisplay::Drop.hides(true, false));
    /// ```
    pub const fn hides(self, drop_eligible: bool, price_eligible: bool) -> bool {
        match self {
            Self::All => false,
            Self::High => !price_eligible,
            Self::Drop => !drop_eligible,
            Self::HighAndDrop => !drop_eligible || !price_eligible,
        }
    }
}

impl std::fmt::Display for CardDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CardDisplay {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "high" => Ok(Self::High),
            "drop" => Ok(Self::Drop),
            "high+drop" => Ok(Self::HighAndDrop),
            _ => Err(ParameterError::UnknownCardDisplay(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(CardDisplay::HighAndDrop.to_string(), "high+drop");
        assert_eq!(ValueSource::Kirac.to_string(), ValueSource::Kirac.as_str());
    }

    #[rstest]
    #[case(CardDisplay::All, false, false, false)]
    #[case(CardDisplay::High, true, false, true)]
    #[case(CardDisplay::High, false, true, false)]
    #[case(CardDisplay::Drop, false, true, true)]
    #[case(CardDisplay::Drop, true, false, false)]
    #[case(CardDisplay::HighAndDrop, true, false, true)]
    #[case(CardDisplay::HighAndDrop, false, true, true)]
    #[case(CardDisplay::HighAndDrop, true, true, false)]
    fn display_policy(
        #[case] mode: CardDisplay,
        #[case] drop_eligible: bool,
        #[case] price_eligible: bool,
        #[case] hidden: bool,
    ) {
        assert_eq!(mode.hides(drop_eligible, price_eligible), hidden);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(PriceSource::from_str(" Standard "), Ok(PriceSource::Standard));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = ValueSource::from_str("heist").unwrap_err();
        assert!(err.to_string().contains("heist"));
    }

    #[test]
    fn serde_uses_cli_names() {
        let encoded = serde_json::to_string(&CardDisplay::HighAndDrop).expect("encode display");
        assert_eq!(encoded, "\"high+drop\"");
        let decoded: PriceSource = serde_json::from_str("\"league\"").expect("decode source");
        assert_eq!(decoded, PriceSource::League);
    }
}
