//! Canonical form of a painting title for key comparison.

/// Lower-case a title and strip every whitespace run, internal ones included.
///
/// `"Mountain  Majesty "` and `"mountainmajesty"` normalize to the same
/// string. Idempotent: normalizing an already-normalized title is a no-op.
pub fn normalize_title(title: &str) -> String {
    title.to_lowercase().split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_internal_whitespace_and_case() {
        assert_eq!(normalize_title("Mountain Majesty"), "mountainmajesty");
        assert_eq!(normalize_title("  A Walk\tin the Woods \n"), "awalkinthewoods");
    }

    #[test]
    fn empty_input_is_fine() {
        assert_eq!(normalize_title(""), "");
        assert_eq!(normalize_title("   "), "");
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let once = normalize_title("Winter's  Peaceful GLOW");
        assert_eq!(normalize_title(&once), once);
    }
}
