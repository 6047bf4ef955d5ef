//! Levenshtein edit distance.
//!
//! Distances are computed over Unicode scalar values, so `"héllo"` and
//! `"hello"` are one substitution apart regardless of their UTF-8 byte length.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one string into the other.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    levenshtein_distance_chars(&s1_chars, &s2_chars)
}

/// Levenshtein distance over pre-split character slices.
///
/// Uses two rolling rows, so memory is `O(min(len1, len2))`.
pub fn levenshtein_distance_chars(s1: &[char], s2: &[char]) -> usize {
    // Keep the shorter sequence along the row.
    let (long, short) = if s1.len() >= s2.len() { (s1, s2) } else { (s2, s1) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            let cost = if lc == sc { 0 } else { 1 };

            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

/// Edit distance scaled by the average character length of both strings.
///
/// 0.0 means identical. Two empty strings have no average length and are
/// defined to be identical (0.0) rather than dividing by zero.
pub fn average_length_ratio(s1: &str, s2: &str) -> f64 {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let average_length = (s1_chars.len() + s2_chars.len()) as f64 / 2.0;
    if average_length == 0.0 {
        return 0.0;
    }

    levenshtein_distance_chars(&s1_chars, &s2_chars) as f64 / average_length
}
