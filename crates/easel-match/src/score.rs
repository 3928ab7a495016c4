//! Token-set similarity scoring on the 0-100 scale.
//!
//! The join threshold is compared against these scores directly, so the
//! scale and symmetry here are contractual: `score(a, b) == score(b, a)`,
//! identical non-empty inputs score 100, and disjoint inputs with no shared
//! characters score 0.

use std::collections::BTreeSet;

/// Edit-based similarity between two strings, 0-100.
///
/// `round(100 * 2M / T)` where `M` is the length of the longest common
/// subsequence and `T` the total length of both strings. Two empty strings
/// are identical and score 100.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100;
    }
    let matched = lcs_len(&a, &b);
    ((200.0 * matched as f64) / total as f64).round() as u8
}

/// Token-set ratio: compare the shared-token core of two strings against
/// each string's unique remainder and keep the best of the three pairings.
///
/// Tokens are lower-cased alphanumeric runs; everything else is treated as a
/// separator. A side with no tokens at all scores 0 against anything.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }

    let intersection: Vec<&str> = tokens_a
        .intersection(&tokens_b)
        .map(String::as_str)
        .collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).map(String::as_str).collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).map(String::as_str).collect();

    // BTreeSet iteration is already sorted, so the three comparison strings
    // are deterministic regardless of input token order.
    let sect = intersection.join(" ");
    let combined_a = join_sorted(&sect, &only_a);
    let combined_b = join_sorted(&sect, &only_b);

    ratio(&sect, &combined_a)
        .max(ratio(&sect, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

fn tokenize(input: &str) -> BTreeSet<String> {
    input
        .to_lowercase()
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_sorted(sect: &str, rest: &[&str]) -> String {
    if rest.is_empty() {
        return sect.to_string();
    }
    if sect.is_empty() {
        return rest.join(" ");
    }
    let mut combined = String::with_capacity(sect.len() + 1 + rest.iter().map(|t| t.len() + 1).sum::<usize>());
    combined.push_str(sect);
    for token in rest {
        combined.push(' ');
        combined.push_str(token);
    }
    combined
}

/// Longest common subsequence length, two-row dynamic programming.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_score_100() {
        assert_eq!(token_set_ratio("mountainmajesty", "mountainmajesty"), 100);
        assert_eq!(token_set_ratio("A Walk in the Woods", "a walk in the woods"), 100);
    }

    #[test]
    fn shared_tokens_dominate_remainders() {
        // The intersection string is a prefix-aligned subset of both
        // combinations, so heavy token overlap scores high even with noise.
        let score = token_set_ratio("misty winter mountain", "mountain misty extra words");
        assert!(score >= 70, "got {score}");
    }

    #[test]
    fn disjoint_inputs_score_low() {
        let score = token_set_ratio("winter mist", "summer fog");
        assert!(score < 60, "got {score}");
    }

    #[test]
    fn no_shared_characters_scores_zero() {
        assert_eq!(token_set_ratio("aaa", "zzz"), 0);
    }

    #[test]
    fn empty_side_scores_zero() {
        assert_eq!(token_set_ratio("", "mountain"), 0);
        assert_eq!(token_set_ratio("mountain", ""), 0);
        assert_eq!(token_set_ratio("", ""), 0);
        assert_eq!(token_set_ratio("!!!", "mountain"), 0);
    }

    #[test]
    fn scorer_is_symmetric() {
        let pairs = [
            ("ocean dream", "dream of oceans"),
            ("winter mist", "summer fog"),
            ("cabin by the lake", "lakeside cabin"),
        ];
        for (a, b) in pairs {
            assert_eq!(token_set_ratio(a, b), token_set_ratio(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn ratio_on_plain_strings() {
        assert_eq!(ratio("", ""), 100);
        assert_eq!(ratio("abc", "abc"), 100);
        assert_eq!(ratio("abc", ""), 0);
        // lcs("abcd", "abed") = "abd" -> 2*3/8 = 75
        assert_eq!(ratio("abcd", "abed"), 75);
    }

    #[test]
    fn punctuation_is_a_separator() {
        assert_eq!(
            token_set_ratio("winter's glow", "winter s glow"),
            100,
        );
    }
}
