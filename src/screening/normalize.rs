//! Name canonicalization.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

/// Normalize a name for comparison.
///
/// Lowercases, collapses whitespace, drops `.` and `,`, and turns `-` into a
/// space. Apostrophes are kept, so `O'Brien` becomes `o'brien`.
pub fn normalize(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let collapsed = collapse_whitespace(&name.to_lowercase());

    let stripped: String = collapsed
        .chars()
        .filter(|c| *c != '.' && *c != ',')
        .map(|c| if c == '-' { ' ' } else { c })
        .collect();

    // Dropping punctuation can leave double or trailing spaces
    collapse_whitespace(&stripped)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_name() {
        assert_eq!(normalize("John Smith"), "john smith");
        assert_eq!(normalize("  John   Smith  "), "john smith");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(normalize("John O'Brien"), "john o'brien");
        assert_eq!(normalize("Ahmed Al-Mansouri"), "ahmed al mansouri");
        assert_eq!(normalize("John, Smith."), "john smith");
    }

    #[test]
    fn test_punctuation_leaves_no_double_spaces() {
        assert_eq!(normalize("V. Petrov"), "v petrov");
        assert_eq!(normalize("Kim - Jong"), "kim jong");
        assert_eq!(normalize("Al- Rashid ,"), "al rashid");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(" .,- "), "");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize("JOHN SMITH"), "john smith");
        assert_eq!(normalize("john smith"), "john smith");
    }

    #[test]
    fn test_tabs_and_newlines() {
        assert_eq!(normalize("Chen\tWei\n"), "chen wei");
    }
}
