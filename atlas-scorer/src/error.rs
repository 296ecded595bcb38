//! Error types raised while ranking maps.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when the parameters cannot drive the ranking pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// The baseline card name is not in the catalog.
    #[error("baseline card `{name}` is not in the card catalog")]
    UnknownBaselineCard {
        /// Requested card name.
        name: String,
    },
    /// The baseline card exists but has no usable drop weight.
    #[error("baseline card `{name}` has no drop weight")]
    BaselineWithoutWeight {
        /// Requested card name.
        name: String,
    },
    /// A numeric parameter was NaN or infinite.
    #[error("parameter `{field}` must be a finite number")]
    NonFiniteParameter {
        /// Parameter name as written in configuration.
        field: &'static str,
    },
}
