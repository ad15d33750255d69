//! Built-in sample watchlists.
//!
//! Fictional but realistic records. A deployment points the screener at a
//! data file instead (see `config`).

use super::entry::{ReferenceEntry, ReferenceList};

struct SeedEntry {
    name: &'static str,
    aliases: &'static [&'static str],
    reason: &'static str,
    date_added: &'static str,
    country: &'static str,
}

const OFAC: &[SeedEntry] = &[
    SeedEntry {
        name: "Vladimir Petrov",
        aliases: &["Vlad Petrov", "V. Petrov", "Vladimir P. Petrov"],
        reason: "Sanctions evasion, money laundering",
        date_added: "2022-03-15",
        country: "Russia",
    },
    SeedEntry {
        name: "Ahmed Al-Mansouri",
        aliases: &["Ahmed Mansouri", "A. Al-Mansouri", "Ahmed Mansur"],
        reason: "Terrorism financing",
        date_added: "2021-11-20",
        country: "Syria",
    },
    SeedEntry {
        name: "Maria Rodriguez",
        aliases: &["Maria R. Rodriguez", "M. Rodriguez"],
        reason: "Drug trafficking, money laundering",
        date_added: "2023-06-10",
        country: "Colombia",
    },
    SeedEntry {
        name: "Chen Wei",
        aliases: &["Wei Chen", "C. Wei"],
        reason: "Sanctions violations, export control",
        date_added: "2022-09-05",
        country: "China",
    },
];

const UN_SANCTIONS: &[SeedEntry] = &[
    SeedEntry {
        name: "Vladimir Petrov",
        aliases: &["Vlad Petrov", "V. Petrov"],
        reason: "UN Security Council sanctions",
        date_added: "2022-03-20",
        country: "Russia",
    },
    SeedEntry {
        name: "Hassan Al-Zahrani",
        aliases: &["Hassan Zahrani", "H. Al-Zahrani"],
        reason: "Terrorism-related activities",
        date_added: "2020-05-12",
        country: "Yemen",
    },
    SeedEntry {
        name: "Kim Jong-il",
        aliases: &["Kim Jong Il", "K. Jong-il"],
        reason: "Nuclear proliferation",
        date_added: "2006-10-14",
        country: "North Korea",
    },
];

const EU_SANCTIONS: &[SeedEntry] = &[
    SeedEntry {
        name: "Vladimir Petrov",
        aliases: &["Vlad Petrov", "V. Petrov"],
        reason: "EU sanctions - Ukraine conflict",
        date_added: "2022-02-28",
        country: "Russia",
    },
    SeedEntry {
        name: "Sergei Volkov",
        aliases: &["Sergey Volkov", "S. Volkov"],
        reason: "EU sanctions - human rights violations",
        date_added: "2023-01-15",
        country: "Russia",
    },
    SeedEntry {
        name: "Fatima Al-Hashimi",
        aliases: &["Fatima Hashimi", "F. Al-Hashimi"],
        reason: "EU sanctions - terrorism financing",
        date_added: "2021-08-30",
        country: "Iraq",
    },
];

const UK_SANCTIONS: &[SeedEntry] = &[
    SeedEntry {
        name: "Vladimir Petrov",
        aliases: &["Vlad Petrov", "V. Petrov"],
        reason: "UK sanctions - Ukraine conflict",
        date_added: "2022-03-01",
        country: "Russia",
    },
    SeedEntry {
        name: "James O'Brien",
        aliases: &["Jim O'Brien", "J. O'Brien", "James O Brien"],
        reason: "UK sanctions - corruption",
        date_added: "2022-11-22",
        country: "UK",
    },
    SeedEntry {
        name: "Mohammed Al-Rashid",
        aliases: &["Mohammed Rashid", "M. Al-Rashid", "Mohammad Al-Rashid"],
        reason: "UK sanctions - terrorism",
        date_added: "2020-12-10",
        country: "Saudi Arabia",
    },
];

const SEED: &[(&str, &[SeedEntry])] = &[
    ("OFAC", OFAC),
    ("UN_Sanctions", UN_SANCTIONS),
    ("EU_Sanctions", EU_SANCTIONS),
    ("UK_Sanctions", UK_SANCTIONS),
];

/// Names of the built-in lists, in iteration order.
pub const SEED_LIST_NAMES: [&str; 4] = ["OFAC", "UN_Sanctions", "EU_Sanctions", "UK_Sanctions"];

// Built directly: every name above is non-blank and unique
pub(super) fn seed_lists() -> Vec<ReferenceList> {
    SEED.iter()
        .map(|(name, entries)| ReferenceList {
            name: name.to_string(),
            entries: entries.iter().map(to_entry).collect(),
        })
        .collect()
}

fn to_entry(seed: &SeedEntry) -> ReferenceEntry {
    ReferenceEntry {
        primary_name: seed.name.to_string(),
        aliases: seed.aliases.iter().map(|a| a.to_string()).collect(),
        reason: seed.reason.to_string(),
        date_added: seed.date_added.to_string(),
        country: seed.country.to_string(),
    }
}
