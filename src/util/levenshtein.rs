//! Levenshtein distance algorithms.
//!
//! Distances are measured over Unicode scalar values, so `"café"` and
//! `"cafe"` are one substitution apart regardless of their UTF-8 byte length.

use std::cmp::min;

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `s1` into `s2`.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    levenshtein_distance_chars(&s1_chars, &s2_chars)
}

/// Levenshtein distance over pre-split character slices.
///
/// Fills the full `(|a|+1) × (|b|+1)` table.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance_chars(s1: &[char], s2: &[char]) -> usize {
    let len1 = s1.len();
    let len2 = s2.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if s1[i - 1] == s2[j - 1] { 0 } else { 1 };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[len1][len2]
}

/// Bounded Levenshtein distance over character slices.
///
/// Returns `None` as soon as the distance is known to exceed `threshold`.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance_threshold(s1: &[char], s2: &[char], threshold: usize) -> Option<usize> {
    let len1 = s1.len();
    let len2 = s2.len();

    if len1.abs_diff(len2) > threshold {
        return None;
    }

    if len1 == 0 {
        return if len2 <= threshold { Some(len2) } else { None };
    }
    if len2 == 0 {
        return if len1 <= threshold { Some(len1) } else { None };
    }

    // Only two rows are needed when the full table is not kept.
    let mut prev_row = vec![0; len2 + 1];
    let mut curr_row = vec![0; len2 + 1];

    for j in 0..=len2 {
        prev_row[j] = j;
    }

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = if s1[i - 1] == s2[j - 1] { 0 } else { 1 };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Row minima never decrease, so the final distance is already out of range.
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    if distance <= threshold {
        Some(distance)
    } else {
        None
    }
}

/// Difference in character count, a lower bound on the edit distance.
pub fn length_difference(s1: &str, s2: &str) -> usize {
    s1.chars().count().abs_diff(s2.chars().count())
}

/// Matches candidates whose distance to a fixed word is exactly `threshold`.
///
/// This is the edge predicate of every pairwise pass: a cheap length
/// pre-filter (`|len(a) - len(b)| <= threshold`) followed by an exact
/// equality test on the edit distance. Note the equality: a pair at a
/// distance *below* the threshold does not match.
#[derive(Debug, Clone)]
pub struct ExactDistanceMatcher<'a> {
    query_chars: &'a [char],
    threshold: usize,
}

impl<'a> ExactDistanceMatcher<'a> {
    /// Create a new matcher for the given query characters.
    pub fn new(query_chars: &'a [char], threshold: usize) -> Self {
        ExactDistanceMatcher {
            query_chars,
            threshold,
        }
    }

    /// The configured threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Whether the candidate passes the length pre-filter.
    pub fn within_length(&self, candidate: &[char]) -> bool {
        self.query_chars.len().abs_diff(candidate.len()) <= self.threshold
    }

    /// Whether the candidate is exactly `threshold` edits away.
    pub fn is_match(&self, candidate: &[char]) -> bool {
        self.within_length(candidate)
            && levenshtein_distance_threshold(self.query_chars, candidate, self.threshold)
                == Some(self.threshold)
    }
}

/// Convenience form of [`ExactDistanceMatcher::is_match`] for string slices.
pub fn is_exact_distance(s1: &str, s2: &str, threshold: usize) -> bool {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    ExactDistanceMatcher::new(&s1_chars, threshold).is_match(&s2_chars)
}
