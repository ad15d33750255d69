//! Fuzzy name screening: normalization, scoring, entry matching, and
//! screening across watchlists.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial module structure

pub mod matcher;
pub mod normalize;
pub mod screener;
pub mod similarity;

pub use matcher::{match_entry, EntryMatch, Threshold, DEFAULT_THRESHOLD};
pub use normalize::normalize;
pub use screener::{MatchResult, ScreeningReport, WatchlistScreener};
pub use similarity::similarity;
