//! Split candidate generation for delimited column names

use crate::nest::types::is_delimiter;

/// Enumerate all group-prefix candidates for `name`.
///
/// For every delimiter position (scanning from the end), the substring before
/// it is emitted with trailing delimiter runs trimmed. Candidates are
/// deduplicated and ordered by descending string comparison, so an extension
/// like `user_address` sorts before its own prefix `user`.
pub fn candidates(name: &str) -> Vec<String> {
    let mut splits: Vec<String> = Vec::new();
    for (i, c) in name.char_indices().rev() {
        if is_delimiter(c) {
            let split = clean(&name[..i]);
            if !splits.iter().any(|s| s == split) {
                splits.push(split.to_string());
            }
        }
    }
    splits.sort_unstable_by(|a, b| b.cmp(a));
    splits
}

/// Trim trailing delimiter runs. An all-delimiter string is returned as-is.
fn clean(split: &str) -> &str {
    let trimmed = split.trim_end_matches(is_delimiter);
    if trimmed.is_empty() {
        split
    } else {
        trimmed
    }
}

/// The portion of `name` after `split` and its following delimiter, with any
/// leading delimiter run stripped. A remainder consisting entirely of
/// delimiters is returned unstripped.
pub fn suffix_after(split: &str, name: &str) -> String {
    let rest = name.get(split.len() + 1..).unwrap_or("");
    match rest.find(|c| !is_delimiter(c)) {
        Some(i) => rest[i..].to_string(),
        None => rest.to_string(),
    }
}

/// True when `name` begins with `prefix` and the character immediately
/// following it is a delimiter. A `name` no longer than `prefix` is never a
/// valid match; the length guard runs first so the delimiter check cannot
/// index past the end.
pub fn is_valid_prefix(prefix: &str, name: &str) -> bool {
    name.len() > prefix.len()
        && name.starts_with(prefix)
        && name[prefix.len()..].chars().next().is_some_and(is_delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_descending_order() {
        assert_eq!(
            candidates("user_address_city"),
            vec!["user_address".to_string(), "user".to_string()]
        );
    }

    #[test]
    fn test_candidates_no_delimiters() {
        assert!(candidates("id").is_empty());
    }

    #[test]
    fn test_candidates_dedupe_delimiter_runs() {
        // Both delimiter positions in "a__b" clean down to the same prefix
        assert_eq!(candidates("a__b"), vec!["a".to_string()]);
    }

    #[test]
    fn test_candidates_mixed_delimiters() {
        assert_eq!(
            candidates("first name,last"),
            vec!["first name".to_string(), "first".to_string()]
        );
    }

    #[test]
    fn test_candidates_leading_delimiter_run() {
        // Prefixes that are entirely delimiters are kept as-is, not emptied
        assert_eq!(candidates("__x"), vec!["_".to_string(), String::new()]);
    }

    #[test]
    fn test_suffix_after_strips_leading_delimiters() {
        assert_eq!(suffix_after("user", "user_address_city"), "address_city");
        assert_eq!(suffix_after("a", "a__b"), "b");
    }

    #[test]
    fn test_suffix_after_all_delimiter_remainder() {
        assert_eq!(suffix_after("a", "a__"), "_");
    }

    #[test]
    fn test_is_valid_prefix() {
        assert!(is_valid_prefix("user", "user_name"));
        assert!(is_valid_prefix("first", "first name"));
        assert!(!is_valid_prefix("user", "username"));
        assert!(!is_valid_prefix("user_name", "user"));
    }

    #[test]
    fn test_is_valid_prefix_equal_length() {
        // Must short-circuit to false, not read past the end
        assert!(!is_valid_prefix("user", "user"));
    }
}
