//! Watchlist screening across every list in a reference store.
//!
//! CHANGELOG:
//! - 10/19/2026 - Store injected behind Arc, list names computed once
//! - 10/19/2026 - Initial implementation

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::matcher::{match_entry, Threshold};
use crate::watchlist::ReferenceDataStore;

/// One entry-level hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub list_name: String,
    /// Primary name of the entry, even when an alias triggered the match.
    pub matched_name: String,
    /// Rounded to 3 decimal places.
    pub similarity: f64,
    pub reason: String,
    pub date_added: String,
    pub country: String,
}

/// Result of screening one candidate name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningReport {
    matched: bool,
    lists_checked: Vec<String>,
    matches: Vec<MatchResult>,
}

impl ScreeningReport {
    fn new(lists_checked: Vec<String>, matches: Vec<MatchResult>) -> Self {
        Self {
            matched: !matches.is_empty(),
            lists_checked,
            matches,
        }
    }

    /// True iff at least one entry matched.
    pub fn matched(&self) -> bool {
        self.matched
    }

    /// Every list in the store, whether or not it produced a hit.
    pub fn lists_checked(&self) -> &[String] {
        &self.lists_checked
    }

    /// Hits in list order, then entry order. Not sorted by score.
    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    /// Names of lists with at least one hit, without repeats.
    pub fn lists_hit(&self) -> Vec<&str> {
        let mut hit: Vec<&str> = Vec::new();
        for m in &self.matches {
            if !hit.contains(&m.list_name.as_str()) {
                hit.push(&m.list_name);
            }
        }
        hit
    }
}

/// Screens names against an immutable reference store.
///
/// Cheap to clone and safe to share across threads. Swapping reference data
/// means building a new screener over a new store.
#[derive(Debug, Clone)]
pub struct WatchlistScreener {
    store: Arc<ReferenceDataStore>,
    lists_checked: Vec<String>,
}

impl WatchlistScreener {
    pub fn new(store: ReferenceDataStore) -> Self {
        Self::with_store(Arc::new(store))
    }

    /// Build over a shared store.
    pub fn with_store(store: Arc<ReferenceDataStore>) -> Self {
        let lists_checked = store.list_names();
        Self {
            store,
            lists_checked,
        }
    }

    pub fn store(&self) -> &ReferenceDataStore {
        &self.store
    }

    pub fn lists_checked(&self) -> &[String] {
        &self.lists_checked
    }

    /// Screen a candidate name against every entry of every list.
    ///
    /// Blank candidates return an empty report without comparing anything.
    /// The same identity on several lists yields one hit per list.
    pub fn screen(&self, candidate: &str, threshold: Threshold) -> ScreeningReport {
        if candidate.trim().is_empty() {
            tracing::debug!("blank candidate, skipping comparison");
            return ScreeningReport::new(self.lists_checked.clone(), Vec::new());
        }

        let mut matches = Vec::new();
        for list in self.store.lists() {
            for entry in list.entries() {
                let outcome = match_entry(candidate, entry, threshold);
                if !outcome.is_match {
                    continue;
                }

                tracing::debug!(
                    candidate,
                    list = list.name(),
                    entry = entry.primary_name(),
                    similarity = outcome.similarity,
                    "watchlist hit"
                );
                matches.push(MatchResult {
                    list_name: list.name().to_string(),
                    matched_name: entry.primary_name().to_string(),
                    similarity: round3(outcome.similarity),
                    reason: entry.reason().to_string(),
                    date_added: entry.date_added().to_string(),
                    country: entry.country().to_string(),
                });
            }
        }

        ScreeningReport::new(self.lists_checked.clone(), matches)
    }

    /// Screen at the default threshold (0.85).
    pub fn screen_default(&self, candidate: &str) -> ScreeningReport {
        self.screen(candidate, Threshold::default())
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watchlist::seed::SEED_LIST_NAMES;
    use crate::watchlist::{ReferenceEntry, ReferenceList};

    fn seed_screener() -> WatchlistScreener {
        WatchlistScreener::new(ReferenceDataStore::seed())
    }

    #[test]
    fn test_exact_match_found() {
        let report = seed_screener().screen_default("Vladimir Petrov");
        assert!(report.matched());

        let ofac = report
            .matches()
            .iter()
            .find(|m| m.list_name == "OFAC")
            .unwrap();
        assert_eq!(ofac.matched_name, "Vladimir Petrov");
        assert_eq!(ofac.similarity, 1.0);
        assert_eq!(ofac.reason, "Sanctions evasion, money laundering");
        assert_eq!(ofac.date_added, "2022-03-15");
        assert_eq!(ofac.country, "Russia");
    }

    #[test]
    fn test_alias_reports_primary_name() {
        let report = seed_screener().screen_default("Vlad Petrov");
        assert!(report.matched());
        for m in report.matches() {
            assert_eq!(m.matched_name, "Vladimir Petrov");
            assert!(m.similarity >= 0.85);
        }
        assert!(report.lists_hit().contains(&"OFAC"));
    }

    #[test]
    fn test_same_identity_reported_per_list() {
        let report = seed_screener().screen_default("Vladimir Petrov");
        assert_eq!(report.matches().len(), 4);
        assert_eq!(report.lists_hit(), SEED_LIST_NAMES);
    }

    #[test]
    fn test_no_match() {
        let report = seed_screener().screen_default("John Smith");
        assert!(!report.matched());
        assert!(report.matches().is_empty());
        assert_eq!(report.lists_checked(), SEED_LIST_NAMES);
    }

    #[test]
    fn test_blank_candidate_short_circuits() {
        let screener = seed_screener();
        for candidate in ["", "   ", "\t\n"] {
            let report = screener.screen(candidate, Threshold::new(0.0).unwrap());
            assert!(!report.matched());
            assert!(report.matches().is_empty());
            assert_eq!(report.lists_checked(), SEED_LIST_NAMES);
        }
    }

    #[test]
    fn test_similarity_is_rounded() {
        let report = seed_screener().screen_default("Sergey Volkov");
        assert_eq!(report.matches().len(), 1);
        let m = &report.matches()[0];
        assert_eq!(m.list_name, "EU_Sanctions");
        assert_eq!(m.matched_name, "Sergei Volkov");
        assert_eq!(m.similarity, 0.923);
    }

    #[test]
    fn test_apostrophe_names() {
        let report = seed_screener().screen_default("Jim O'Brien");
        assert_eq!(report.lists_hit(), vec!["UK_Sanctions"]);
        assert_eq!(report.matches()[0].matched_name, "James O'Brien");
    }

    #[test]
    fn test_threshold_widens_matches() {
        let screener = seed_screener();
        let strict = screener.screen("Vlad Petrov", Threshold::new(0.99).unwrap());
        let loose = screener.screen("Vlad Petrov", Threshold::new(0.5).unwrap());
        assert!(loose.matches().len() >= strict.matches().len());
    }

    #[test]
    fn test_iteration_order() {
        let store = ReferenceDataStore::new(vec![
            ReferenceList::new(
                "B",
                vec![
                    ReferenceEntry::new("Jane Roe").unwrap(),
                    ReferenceEntry::new("Jane Rowe").unwrap(),
                ],
            )
            .unwrap(),
            ReferenceList::new("A", vec![ReferenceEntry::new("Jane Roe").unwrap()]).unwrap(),
        ])
        .unwrap();
        let report = WatchlistScreener::new(store).screen_default("Jane Rowe");

        let order: Vec<(&str, &str)> = report
            .matches()
            .iter()
            .map(|m| (m.list_name.as_str(), m.matched_name.as_str()))
            .collect();
        assert_eq!(order, vec![("B", "Jane Roe"), ("B", "Jane Rowe"), ("A", "Jane Roe")]);
        assert_eq!(report.matches()[1].similarity, 1.0);
    }

    #[test]
    fn test_empty_store() {
        let screener = WatchlistScreener::new(ReferenceDataStore::new(Vec::new()).unwrap());
        let report = screener.screen_default("Vladimir Petrov");
        assert!(!report.matched());
        assert!(report.lists_checked().is_empty());
    }

    #[test]
    fn test_shared_store_across_threads() {
        let screener = seed_screener();
        let handles: Vec<_> = ["Vladimir Petrov", "Chen Wei", "John Smith"]
            .into_iter()
            .map(|name| {
                let screener = screener.clone();
                std::thread::spawn(move || screener.screen_default(name).matched())
            })
            .collect();
        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![true, true, false]);
    }

    #[test]
    fn test_report_serializes() {
        let report = seed_screener().screen_default("Chen Wei");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["matched"], true);
        assert_eq!(value["lists_checked"].as_array().unwrap().len(), 4);
        assert_eq!(value["matches"][0]["list_name"], "OFAC");
        assert_eq!(value["matches"][0]["matched_name"], "Chen Wei");
    }
}
