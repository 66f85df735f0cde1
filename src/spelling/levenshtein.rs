//! Edit distance calculation for spelling suggestions.

use std::cmp::min;

use ahash::AHashMap;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // Use only two rows for space optimization
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Calculate the unrestricted Damerau-Levenshtein distance, which also counts
/// a transposition of two adjacent characters as a single edit, even when
/// other edits happen between the transposed characters.
#[allow(clippy::needless_range_loop)]
pub fn damerau_levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let infinity = len1 + len2;
    // Last row in which each character was seen in s1
    let mut last_row: AHashMap<char, usize> = AHashMap::new();

    // The matrix is offset by one so that row/column 0 hold the sentinel.
    let mut matrix = vec![vec![0; len2 + 2]; len1 + 2];
    matrix[0][0] = infinity;
    for i in 0..=len1 {
        matrix[i + 1][0] = infinity;
        matrix[i + 1][1] = i;
    }
    for j in 0..=len2 {
        matrix[0][j + 1] = infinity;
        matrix[1][j + 1] = j;
    }

    for i in 1..=len1 {
        let mut last_match_col = 0;

        for j in 1..=len2 {
            let i1 = last_row.get(&s2_chars[j - 1]).copied().unwrap_or(0);
            let j1 = last_match_col;

            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            matrix[i + 1][j + 1] = min(
                min(
                    matrix[i][j] + cost,    // substitution
                    matrix[i + 1][j] + 1,   // insertion
                ),
                min(
                    matrix[i][j + 1] + 1, // deletion
                    matrix[i1][j1] + (i - i1 - 1) + 1 + (j - j1 - 1), // transposition
                ),
            );
        }

        last_row.insert(s1_chars[i - 1], i);
    }

    matrix[len1 + 1][len2 + 1]
}

/// Divide an edit distance by the length of the longer string, giving a
/// value in `[0, 1]`. Two empty strings are at distance 0.
pub fn normalized(distance: usize, s1: &str, s2: &str) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    distance as f64 / max_len as f64
}
