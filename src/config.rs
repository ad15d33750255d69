//! Reference data source selection.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::watchlist::ReferenceDataStore;

/// Environment variable naming a watchlist data file.
pub const DATA_PATH_ENV: &str = "KYC_WATCHLIST_PATH";

/// Where reference data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A JSON file that must exist and parse.
    File(PathBuf),
    /// The built-in sample lists.
    Seed,
}

/// Resolve the data source.
///
/// Tries multiple locations in order:
/// 1. Explicit path (e.g. `--data`)
/// 2. KYC_WATCHLIST_PATH env var
/// 3. ~/.kyc-screen/watchlists.json, if it exists
/// 4. Built-in seed lists
pub fn resolve_data_source(explicit: Option<&Path>) -> DataSource {
    resolve_from(
        explicit,
        std::env::var_os(DATA_PATH_ENV).map(PathBuf::from),
        default_data_path(),
    )
}

/// ~/.kyc-screen/watchlists.json
pub fn default_data_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".kyc-screen").join("watchlists.json"))
}

fn resolve_from(explicit: Option<&Path>, env: Option<PathBuf>, home: Option<PathBuf>) -> DataSource {
    if let Some(path) = explicit {
        return DataSource::File(path.to_path_buf());
    }

    if let Some(path) = env {
        if path.exists() {
            return DataSource::File(path);
        }
        tracing::warn!(path = %path.display(), "{} points to a missing file, using seed lists", DATA_PATH_ENV);
    }

    match home {
        Some(path) if path.exists() => DataSource::File(path),
        _ => DataSource::Seed,
    }
}

/// Build the store for a data source.
pub fn load_store(source: &DataSource) -> Result<ReferenceDataStore> {
    match source {
        DataSource::File(path) => ReferenceDataStore::load(path),
        DataSource::Seed => Ok(ReferenceDataStore::seed()),
    }
}
