//! Search filtering over row text using nucleo-matcher.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Filter a list of haystacks by fuzzy match.
///
/// Returns the indices of matching entries *in their original order* —
/// searching narrows the table, it does not re-rank it. An empty query
/// matches everything.
pub fn filter_rows(query: &str, haystacks: &[String]) -> Vec<usize> {
    if query.is_empty() {
        return (0..haystacks.len()).collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    haystacks
        .iter()
        .enumerate()
        .filter_map(|(index, haystack)| {
            buf.clear();
            let haystack = Utf32Str::new(haystack, &mut buf);
            pattern.score(haystack, &mut matcher).map(|_| index)
        })
        .collect()
}
