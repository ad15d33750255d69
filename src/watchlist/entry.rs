//! Watchlist records.
//!
//! CHANGELOG:
//! - 10/19/2026 - Validated construction and serde defaults for optional fields
//! - 10/19/2026 - Initial implementation

use serde::{Deserialize, Serialize};

use crate::error::ScreenError;

/// Reason recorded when a data file leaves it out.
pub const DEFAULT_REASON: &str = "Not specified";

/// Date and country recorded when a data file leaves them out.
pub const UNKNOWN: &str = "Unknown";

/// One flagged identity within a watchlist.
///
/// Immutable once built; the primary name is never blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord")]
pub struct ReferenceEntry {
    #[serde(rename = "name")]
    pub(crate) primary_name: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) reason: String,
    pub(crate) date_added: String,
    pub(crate) country: String,
}

/// On-disk shape of an entry, before validation.
#[derive(Debug, Deserialize)]
struct EntryRecord {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default = "default_reason")]
    reason: String,
    #[serde(default = "unknown")]
    date_added: String,
    #[serde(default = "unknown")]
    country: String,
}

fn default_reason() -> String {
    DEFAULT_REASON.to_string()
}

fn unknown() -> String {
    UNKNOWN.to_string()
}

impl TryFrom<EntryRecord> for ReferenceEntry {
    type Error = ScreenError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(record.name)?
            .with_aliases(record.aliases)
            .with_reason(record.reason)
            .with_date_added(record.date_added)
            .with_country(record.country))
    }
}

impl ReferenceEntry {
    /// Create an entry with no aliases and placeholder metadata.
    pub fn new(primary_name: impl Into<String>) -> Result<Self, ScreenError> {
        let primary_name = primary_name.into();
        if primary_name.trim().is_empty() {
            return Err(ScreenError::MissingPrimaryName);
        }

        Ok(Self {
            primary_name,
            aliases: Vec::new(),
            reason: default_reason(),
            date_added: unknown(),
            country: unknown(),
        })
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Date is kept as opaque text.
    pub fn with_date_added(mut self, date_added: impl Into<String>) -> Self {
        self.date_added = date_added.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn primary_name(&self) -> &str {
        &self.primary_name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn date_added(&self) -> &str {
        &self.date_added
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

/// A named watchlist: entries in listing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ListRecord")]
pub struct ReferenceList {
    pub(crate) name: String,
    pub(crate) entries: Vec<ReferenceEntry>,
}

#[derive(Debug, Deserialize)]
struct ListRecord {
    name: String,
    #[serde(default)]
    entries: Vec<ReferenceEntry>,
}

impl TryFrom<ListRecord> for ReferenceList {
    type Error = ScreenError;

    fn try_from(record: ListRecord) -> Result<Self, Self::Error> {
        Self::new(record.name, record.entries)
    }
}

impl ReferenceList {
    pub fn new(name: impl Into<String>, entries: Vec<ReferenceEntry>) -> Result<Self, ScreenError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ScreenError::BlankListName);
        }
        Ok(Self { name, entries })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    /// Find an entry by its exact primary name.
    pub fn find(&self, primary_name: &str) -> Option<&ReferenceEntry> {
        self.entries.iter().find(|e| e.primary_name == primary_name)
    }
}
