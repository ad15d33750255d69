//! kyc-screen library
//!
//! Fuzzy screening of person names against in-memory watchlists.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial library structure

// Core modules
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod screening;
pub mod watchlist;

pub use error::ScreenError;
pub use screening::{
    match_entry, normalize, similarity, EntryMatch, MatchResult, ScreeningReport, Threshold,
    WatchlistScreener, DEFAULT_THRESHOLD,
};
pub use watchlist::{ReferenceDataStore, ReferenceEntry, ReferenceList};
