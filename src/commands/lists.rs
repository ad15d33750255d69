//! Watchlist inventory command.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use anyhow::Result;
use serde::Serialize;

use crate::output::OutputControls;
use crate::watchlist::ReferenceDataStore;

#[derive(Debug, Serialize)]
struct ListSummary<'a> {
    name: &'a str,
    entries: usize,
}

/// List every watchlist with its entry count.
pub fn list(store: &ReferenceDataStore, output: &OutputControls) -> Result<()> {
    let summaries: Vec<ListSummary> = store
        .lists()
        .iter()
        .map(|l| ListSummary {
            name: l.name(),
            entries: l.entries().len(),
        })
        .collect();

    if output.json {
        output.print(&summaries);
    } else {
        if summaries.is_empty() {
            println!("No watchlists loaded.");
            return Ok(());
        }

        println!("Watchlists ({}):", summaries.len());
        println!("{}", "-".repeat(50));
        for summary in &summaries {
            println!("{}: {} entries", summary.name, summary.entries);
        }
    }

    Ok(())
}
