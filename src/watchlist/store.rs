//! Reference data store - the set of watchlists a screener reads.
//!
//! CHANGELOG:
//! - 10/19/2026 - Added JSON loading (wrapped and flat formats)
//! - 10/19/2026 - Initial implementation

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

use super::entry::ReferenceList;
use super::seed;
use crate::error::ScreenError;

/// Watchlists in iteration order, keyed by unique name.
///
/// Read-only once built. To change reference data, build a new store and
/// hand it to a new screener.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReferenceDataStore {
    lists: Vec<ReferenceList>,
}

impl ReferenceDataStore {
    /// Build a store, rejecting duplicate list names.
    pub fn new(lists: Vec<ReferenceList>) -> Result<Self, ScreenError> {
        let mut seen = HashSet::new();
        for list in &lists {
            if !seen.insert(list.name()) {
                return Err(ScreenError::DuplicateList(list.name().to_string()));
            }
        }
        Ok(Self { lists })
    }

    /// The built-in OFAC / UN / EU / UK sample lists.
    pub fn seed() -> Self {
        Self {
            lists: seed::seed_lists(),
        }
    }

    /// Load a store from a JSON file.
    ///
    /// Supports both formats:
    /// - `{"watchlists": [...]}`
    /// - `[...]` (flat array of lists)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read watchlist file: {:?}", path))?;

        let store = Self::from_json(&content)
            .with_context(|| format!("Failed to load watchlist file: {:?}", path))?;

        tracing::info!(
            path = %path.display(),
            lists = store.lists.len(),
            entries = store.total_entries(),
            "loaded watchlists"
        );
        Ok(store)
    }

    /// Parse a store from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(content).with_context(|| "Failed to parse watchlist JSON")?;

        let lists_value = match value {
            Value::Object(mut map) => map
                .remove("watchlists")
                .ok_or_else(|| anyhow!("Watchlist file has no \"watchlists\" key"))?,
            other => other,
        };

        let lists: Vec<ReferenceList> =
            serde_json::from_value(lists_value).with_context(|| "Invalid watchlist data")?;

        for list in &lists {
            tracing::debug!(list = list.name(), entries = list.entries().len(), "parsed watchlist");
        }

        Ok(Self::new(lists)?)
    }

    pub fn lists(&self) -> &[ReferenceList] {
        &self.lists
    }

    /// All list names, in iteration order.
    pub fn list_names(&self) -> Vec<String> {
        self.lists.iter().map(|l| l.name().to_string()).collect()
    }

    /// Look up a list by name.
    pub fn get(&self, name: &str) -> Option<&ReferenceList> {
        self.lists.iter().find(|l| l.name() == name)
    }

    pub fn total_entries(&self) -> usize {
        self.lists.iter().map(|l| l.entries().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
