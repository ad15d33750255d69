//! Name utility commands: normalize, similarity.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use anyhow::Result;
use serde_json::json;

use crate::output::OutputControls;
use crate::screening::{normalize, similarity};

/// Print the normalized form of a name.
pub fn normalize_name(name: &str, output: &OutputControls) -> Result<()> {
    let normalized = normalize(name);

    if output.json {
        output.print(&json!({
            "input": name,
            "normalized": normalized,
        }));
    } else {
        println!("{}", normalized);
    }

    Ok(())
}

/// Print the similarity score between two names.
pub fn compare(a: &str, b: &str, output: &OutputControls) -> Result<()> {
    let score = similarity(a, b);

    if output.json {
        output.print(&json!({
            "a": a,
            "b": b,
            "normalized_a": normalize(a),
            "normalized_b": normalize(b),
            "similarity": score,
        }));
    } else {
        println!("{:.3}", score);
    }

    Ok(())
}
