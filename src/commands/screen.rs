//! Screening commands: screen, match.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::output::OutputControls;
use crate::screening::{match_entry, ScreeningReport, Threshold, WatchlistScreener};
use crate::watchlist::ReferenceDataStore;

/// Screen a name against every watchlist.
pub fn screen(
    store: ReferenceDataStore,
    name: &str,
    threshold: f64,
    output: &OutputControls,
) -> Result<()> {
    let threshold = Threshold::new(threshold)?;
    let report = WatchlistScreener::new(store).screen(name, threshold);

    if output.json {
        output.print(&report);
    } else {
        print!("{}", render_report(name, &report));
    }

    Ok(())
}

fn render_report(name: &str, report: &ScreeningReport) -> String {
    let mut out = format!("Checked: {}\n", report.lists_checked().join(", "));

    if !report.matched() {
        out.push_str(&format!("No watchlist matches for {:?}.\n", name));
        return out;
    }

    out.push_str(&format!("Matches for {:?} ({}):\n", name, report.matches().len()));
    out.push_str(&format!("{}\n", "-".repeat(50)));
    for m in report.matches() {
        out.push_str(&format!(
            "[{}] {} ({:.3}) - {}; added {}; {}\n",
            m.list_name, m.matched_name, m.similarity, m.reason, m.date_added, m.country
        ));
    }
    out
}

#[derive(Debug, Serialize)]
struct EntryMatchOutput<'a> {
    list_name: &'a str,
    entry: &'a str,
    is_match: bool,
    similarity: f64,
}

/// Match a name against a single entry, by list and primary name.
pub fn match_one(
    store: &ReferenceDataStore,
    name: &str,
    list_name: &str,
    entry_name: &str,
    threshold: f64,
    output: &OutputControls,
) -> Result<()> {
    let threshold = Threshold::new(threshold)?;

    let list = store
        .get(list_name)
        .ok_or_else(|| anyhow!("Unknown watchlist: {}", list_name))?;
    let entry = list
        .find(entry_name)
        .ok_or_else(|| anyhow!("No entry {:?} in {}", entry_name, list_name))?;

    let outcome = match_entry(name, entry, threshold);

    if output.json {
        output.print(&EntryMatchOutput {
            list_name,
            entry: entry.primary_name(),
            is_match: outcome.is_match,
            similarity: outcome.similarity,
        });
    } else {
        let verdict = if outcome.is_match { "MATCH" } else { "no match" };
        println!(
            "{}: {} vs [{}] {} (similarity {:.3}, threshold {:.2})",
            verdict,
            name,
            list_name,
            entry.primary_name(),
            outcome.similarity,
            threshold.value()
        );
    }

    Ok(())
}
