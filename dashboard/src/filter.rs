//! Fuzzy search over table rows using nucleo-matcher.

use datatable::Record;
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the input list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Fuzzy filter a list of labels.
///
/// Returns matches sorted by score, highest first; equal scores keep their
/// input order. A blank query returns every item with score 0.
pub fn fuzzy_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    let query = query.trim();
    if query.is_empty() {
        return (0..items.len())
            .map(|index| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let haystack = Utf32Str::new(label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    // Stable sort, ties stay in source order
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}

/// Filter records on the given fields, joined into one searchable label.
pub fn filter_records(query: &str, records: &[Record], fields: &[&str]) -> Vec<Record> {
    let labels: Vec<String> = records
        .iter()
        .map(|record| {
            fields
                .iter()
                .filter_map(|field| record.value(field).map(ToString::to_string))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    fuzzy_filter(query, &labels)
        .into_iter()
        .map(|m| records[m.index].clone())
        .collect()
}
