//! Single-entry matching: primary name first, then aliases in order.
//!
//! CHANGELOG:
//! - 10/19/2026 - Threshold newtype, return best score on a miss
//! - 10/19/2026 - Initial implementation

use serde::Serialize;

use super::similarity::similarity;
use crate::error::ScreenError;
use crate::watchlist::ReferenceEntry;

/// Default threshold for a match (0.0 - 1.0).
pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// Slack allowed below the threshold for float noise in the ratio.
const SCORE_TOLERANCE: f64 = 1e-9;

/// A validated similarity threshold in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Threshold(f64);

impl Threshold {
    /// Rejects NaN and values outside `[0.0, 1.0]`.
    pub fn new(value: f64) -> Result<Self, ScreenError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ScreenError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether `score` reaches this threshold.
    pub fn admits(self, score: f64) -> bool {
        score + SCORE_TOLERANCE >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ScreenError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Outcome of matching a candidate against one entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntryMatch {
    pub is_match: bool,
    /// Score of the name that matched, or the best score seen on a miss.
    pub similarity: f64,
}

/// Match a candidate name against an entry's primary name and aliases.
///
/// A primary-name hit wins without looking at aliases. Otherwise the first
/// alias that reaches the threshold wins, even if a later alias scores
/// higher.
pub fn match_entry(candidate: &str, entry: &ReferenceEntry, threshold: Threshold) -> EntryMatch {
    let primary = similarity(candidate, entry.primary_name());
    if threshold.admits(primary) {
        return EntryMatch {
            is_match: true,
            similarity: primary,
        };
    }

    let mut best = primary;
    for alias in entry.aliases() {
        let score = similarity(candidate, alias);
        if threshold.admits(score) {
            return EntryMatch {
                is_match: true,
                similarity: score,
            };
        }
        best = best.max(score);
    }

    EntryMatch {
        is_match: false,
        similarity: best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn petrov() -> ReferenceEntry {
        ReferenceEntry::new("Vladimir Petrov")
            .unwrap()
            .with_aliases(["Vlad Petrov", "V. Petrov"])
    }

    #[test]
    fn test_threshold_bounds() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(Threshold::new(1.5), Err(ScreenError::InvalidThreshold(1.5)));
        assert_eq!(Threshold::new(-0.1), Err(ScreenError::InvalidThreshold(-0.1)));
        assert!(Threshold::new(f64::NAN).is_err());
        assert_eq!(Threshold::default().value(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_exact_match() {
        let result = match_entry("Vladimir Petrov", &petrov(), Threshold::default());
        assert!(result.is_match);
        assert_eq!(result.similarity, 1.0);
    }

    #[test]
    fn test_alias_match() {
        let result = match_entry("Vlad Petrov", &petrov(), Threshold::default());
        assert!(result.is_match);
        assert_eq!(result.similarity, 1.0);
    }

    #[test]
    fn test_primary_short_circuits_aliases() {
        let volkov = ReferenceEntry::new("Sergei Volkov")
            .unwrap()
            .with_aliases(["Sergey Volkov"]);
        // The alias would score 1.0, but the primary already clears 0.85
        let result = match_entry("Sergey Volkov", &volkov, Threshold::default());
        assert!(result.is_match);
        assert!((result.similarity - 24.0 / 26.0).abs() < 1e-12);
    }

    #[test]
    fn test_first_qualifying_alias_wins() {
        let entry = ReferenceEntry::new("Nobody Else")
            .unwrap()
            .with_aliases(["Vlad", "Vlad Petrov"]);
        let result = match_entry("Vlad Petrov", &entry, Threshold::default());
        assert!(result.is_match);
        assert_eq!(result.similarity, 0.85);
    }

    #[test]
    fn test_no_match_reports_best_score() {
        let result = match_entry("John Smith", &petrov(), Threshold::default());
        assert!(!result.is_match);
        assert!(result.similarity < 0.5);

        let entry = ReferenceEntry::new("Ahmed Al-Mansouri")
            .unwrap()
            .with_aliases(["Ahmed Mansouri", "A. Al-Mansouri", "Ahmed Mansur"]);
        let result = match_entry("Mansouri Ahmed", &entry, Threshold::default());
        assert!(!result.is_match);
        // Best of all aliases, not the primary-name score
        assert!((result.similarity - 16.0 / 27.0).abs() < 1e-12, "{}", result.similarity);
        assert!(result.similarity > similarity("Mansouri Ahmed", "Ahmed Al-Mansouri"));
    }

    #[test]
    fn test_lower_threshold() {
        let threshold = Threshold::new(0.5).unwrap();
        let result = match_entry("Vlad", &petrov(), threshold);
        assert!(result.is_match);
        assert_eq!(result.similarity, 0.85);
    }

    #[test]
    fn test_entry_without_aliases() {
        let entry = ReferenceEntry::new("Chen Wei").unwrap();
        let result = match_entry("Wei Chen", &entry, Threshold::default());
        assert!(!result.is_match);
        assert_eq!(result.similarity, similarity("Wei Chen", "Chen Wei"));
    }

    #[test]
    fn test_threshold_extremes() {
        let zero = Threshold::new(0.0).unwrap();
        assert!(match_entry("Zzz", &petrov(), zero).is_match);

        let one = Threshold::new(1.0).unwrap();
        assert!(match_entry("V Petrov", &petrov(), one).is_match);
        assert!(!match_entry("Vladimir Petrova", &petrov(), one).is_match);
    }
}
