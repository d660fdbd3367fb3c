//! Ranking a collection against a query.

use serde::Deserialize;
use tracing::trace;

use super::score::score;

/// Search tuning.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FuzzyOptions {
    /// Minimum score to keep a match. Default `0.3`.
    pub threshold: f64,
    /// Maximum number of results. `None` keeps all.
    pub limit: Option<usize>,
    pub case_sensitive: bool,
}

impl FuzzyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            limit: None,
            case_sensitive: false,
        }
    }
}

/// One ranked result.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch<T> {
    pub item: T,
    pub score: f64,
    /// Char indices into the item's text.
    pub indices: Vec<usize>,
}

/// Rank `items` by how well `get_text(item)` matches `query`.
///
/// A query that is blank after trimming returns every item with score 1 in
/// original order. Otherwise items scoring below the threshold are dropped
/// and the rest are sorted by descending score; ties keep original order.
/// `limit` applies in both cases.
pub fn fuzzy_search<'a, T, F, S>(
    items: &'a [T],
    query: &str,
    get_text: F,
    options: &FuzzyOptions,
) -> Vec<FuzzyMatch<&'a T>>
where
    F: Fn(&'a T) -> S,
    S: AsRef<str>,
{
    let limit = options.limit.unwrap_or(usize::MAX);

    if query.trim().is_empty() {
        return items
            .iter()
            .take(limit)
            .map(|item| FuzzyMatch {
                item,
                score: 1.0,
                indices: Vec::new(),
            })
            .collect();
    }

    let mut matches: Vec<FuzzyMatch<&'a T>> = items
        .iter()
        .filter_map(|item| {
            let text = get_text(item);
            let scored = score(text.as_ref(), query, options.case_sensitive)?;
            trace!(text = text.as_ref(), score = scored.value, "fuzzy score");
            (scored.value >= options.threshold).then(|| FuzzyMatch {
                item,
                score: scored.value,
                indices: scored.indices,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(limit);
    matches
}

/// Whether `text` matches `query` at or above the threshold.
pub fn fuzzy_match(text: &str, query: &str, options: &FuzzyOptions) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    score(text, query, options.case_sensitive).is_some_and(|s| s.value >= options.threshold)
}
