//! Best-match selection over a candidate list.

use crate::score::token_set_ratio;

/// One scored candidate: its position in the candidate list and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub index: usize,
    pub score: u8,
}

/// Score `query` against every candidate and return the top `limit` matches,
/// best first.
///
/// The scan always covers the full list. The sort is stable, so candidates
/// with equal scores keep list order and the first occurrence of the maximal
/// score wins.
pub fn extract<S: AsRef<str>>(query: &str, candidates: &[S], limit: usize) -> Vec<Match> {
    let mut matches: Vec<Match> = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| Match {
            index,
            score: token_set_ratio(query, candidate.as_ref()),
        })
        .collect();
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(limit);
    matches
}

/// The single best candidate, or `None` when the list is empty.
pub fn best_match<S: AsRef<str>>(query: &str, candidates: &[S]) -> Option<Match> {
    extract(query, candidates, 1).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_highest_scoring_candidate() {
        let candidates = ["summerfog", "mountainmajesty", "oceandream"];
        let best = best_match("mountainmajesty", &candidates).unwrap();
        assert_eq!(best.index, 1);
        assert_eq!(best.score, 100);
    }

    #[test]
    fn ties_keep_candidate_order() {
        // Identical candidates score identically; the earlier one must win.
        let candidates = ["oceandream", "oceandream"];
        let best = best_match("oceandream", &candidates).unwrap();
        assert_eq!(best.index, 0);
    }

    #[test]
    fn empty_candidate_list_yields_nothing() {
        let candidates: [&str; 0] = [];
        assert!(best_match("anything", &candidates).is_none());
        assert!(extract("anything", &candidates, 5).is_empty());
    }

    #[test]
    fn limit_bounds_result_length() {
        let candidates = ["a", "ab", "abc", "abcd"];
        let matches = extract("abcd", &candidates, 2);
        assert_eq!(matches.len(), 2);
        assert!(matches[0].score >= matches[1].score);
        assert_eq!(matches[0].index, 3);
    }
}
