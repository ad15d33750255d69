//! Name similarity scoring.
//!
//! Scores are the Ratcliff/Obershelp matching-block ratio, with a floor for
//! names that contain one another.
//!
//! CHANGELOG:
//! - 10/19/2026 - Replaced multi-strategy strsim scoring with matching-block ratio
//! - 10/19/2026 - Initial implementation

use std::collections::HashMap;

use super::normalize::normalize;

/// Score given to a pair where one normalized name contains the other.
///
/// Keeps a bare first name ("Vlad") at or above the default threshold.
pub const SUBSTRING_FLOOR: f64 = 0.85;

/// Sequences at least this long drop over-frequent elements from the index.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity between two names, in `[0.0, 1.0]`.
///
/// Both inputs are normalized first. Equal normalized forms (including two
/// empty strings) score exactly `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_norm = normalize(a);
    let b_norm = normalize(b);

    if a_norm == b_norm {
        return 1.0;
    }

    // Block selection breaks ties by position, so order the pair to keep
    // similarity(a, b) == similarity(b, a)
    let (first, second) = if a_norm <= b_norm {
        (&a_norm, &b_norm)
    } else {
        (&b_norm, &a_norm)
    };
    let ratio = matching_blocks_ratio(first, second);

    let either_empty = a_norm.is_empty() || b_norm.is_empty();
    if !either_empty && (a_norm.contains(b_norm.as_str()) || b_norm.contains(a_norm.as_str())) {
        return ratio.max(SUBSTRING_FLOOR);
    }

    ratio
}

/// `2 * M / (len(a) + len(b))`, where M is the number of characters covered
/// by the matching blocks. Lengths are counted in chars.
///
/// Two empty strings score `1.0`.
pub fn matching_blocks_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = BlockMatcher::new(&a, &b).matched_chars();
    2.0 * matched as f64 / total as f64
}

/// Finds matching blocks between two char sequences.
struct BlockMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each char in `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> BlockMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b2j.entry(*c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b2j }
    }

    /// Total size of all matching blocks.
    fn matched_chars(&self) -> usize {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut matched = 0;

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            matched += k;

            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        matched
    }

    /// Longest block `a[i..i+k] == b[j..j+k]` within the given ranges.
    ///
    /// Ties go to the smallest `i`, then the smallest `j`.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j -> length of the match ending at (i - 1, j)
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Extend across chars the autojunk pass left out of the index
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }
}
