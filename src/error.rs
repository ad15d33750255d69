//! Contract-violation errors raised while building screening inputs.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use thiserror::Error;

/// Errors raised when a threshold or reference record is malformed.
///
/// These indicate a programming or data error in the caller, so they are
/// reported at construction time and never from `screen` itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScreenError {
    #[error("Similarity threshold must be within [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),

    #[error("Watchlist entry is missing a primary name")]
    MissingPrimaryName,

    #[error("Watchlist name must not be blank")]
    BlankListName,

    #[error("Duplicate watchlist: {0}")]
    DuplicateList(String),
}
