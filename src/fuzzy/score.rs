//! First-greedy subsequence scoring.
//!
//! The scan takes the first occurrence of each query character, left to
//! right, and never backtracks to find a better-scoring alignment. Scores
//! combine:
//! - base: `query_len / text_len`;
//! - `+0.05` per matched char, grouped by runs of adjacent indices;
//! - a boundary bonus per matched char (start, after whitespace, camelCase
//!   hump, after a symbol);
//! - `-0.03` per break in a run of matches during the scan.
//!
//! The total is clamped to `[0, 1]`.

const RUN_BONUS: f64 = 0.05;
const START_BONUS: f64 = 0.10;
const WHITESPACE_BONUS: f64 = 0.08;
const CAMEL_BONUS: f64 = 0.06;
const SYMBOL_BONUS: f64 = 0.05;
const GAP_PENALTY: f64 = 0.03;

/// Result of scoring one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    /// In `[0, 1]`, higher is better.
    pub value: f64,
    /// Char indices of the matched characters, ascending.
    pub indices: Vec<usize>,
}

/// Fold one char to its first lowercase char so folded and original text
/// keep the same char indices.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Score `text` against `query`. Returns `None` when some query character
/// has no match. An empty query matches everything with score 1.
pub fn score(text: &str, query: &str, case_sensitive: bool) -> Option<Score> {
    if query.is_empty() {
        return Some(Score {
            value: 1.0,
            indices: Vec::new(),
        });
    }

    let original: Vec<char> = text.chars().collect();
    let (haystack, needle): (Vec<char>, Vec<char>) = if case_sensitive {
        (original.clone(), query.chars().collect())
    } else {
        (
            original.iter().copied().map(fold).collect(),
            query.chars().map(fold).collect(),
        )
    };

    let mut indices = Vec::with_capacity(needle.len());
    let mut q = 0;
    let mut in_run = false;
    let mut gaps = 0usize;

    for (i, &c) in haystack.iter().enumerate() {
        if q == needle.len() {
            break;
        }
        if c == needle[q] {
            indices.push(i);
            q += 1;
            in_run = true;
        } else {
            if in_run {
                gaps += 1;
            }
            in_run = false;
        }
    }
    if q < needle.len() {
        return None;
    }

    let base = needle.len() as f64 / haystack.len() as f64;

    let run_bonus: f64 = runs(&indices).iter().map(|len| *len as f64 * RUN_BONUS).sum();

    let boundary_bonus: f64 = indices
        .iter()
        .map(|&i| boundary_bonus(&original, &haystack, i))
        .sum();

    let value = (base + run_bonus + boundary_bonus - gaps as f64 * GAP_PENALTY).clamp(0.0, 1.0);
    Some(Score { value, indices })
}

/// Lengths of maximal runs of adjacent indices.
fn runs(indices: &[usize]) -> Vec<usize> {
    let mut out = Vec::new();
    let mut len = 0;
    for (n, &i) in indices.iter().enumerate() {
        if n > 0 && i == indices[n - 1] + 1 {
            len += 1;
        } else {
            if len > 0 {
                out.push(len);
            }
            len = 1;
        }
    }
    if len > 0 {
        out.push(len);
    }
    out
}

fn boundary_bonus(original: &[char], folded: &[char], i: usize) -> f64 {
    if i == 0 {
        return START_BONUS;
    }
    let prev = folded[i - 1];
    if prev.is_whitespace() {
        WHITESPACE_BONUS
    } else if original[i].is_ascii_uppercase() && original[i - 1].is_ascii_lowercase() {
        CAMEL_BONUS
    } else if !prev.is_ascii_alphanumeric() {
        SYMBOL_BONUS
    } else {
        0.0
    }
}
