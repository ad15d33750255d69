//! Watchlist reference data: records, lists, and the store that holds them.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial module structure

pub mod entry;
pub mod seed;
pub mod store;

pub use entry::{ReferenceEntry, ReferenceList};
pub use store::ReferenceDataStore;
