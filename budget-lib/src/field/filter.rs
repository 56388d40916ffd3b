//! Prefix filtering over a candidate list.

/// A candidate that survived filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
}

/// Normalize typed text for matching: surrounding whitespace is dropped and
/// the rest is lowercased.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Filter `candidates` down to those whose lowercase form starts with the
/// normalized `query`.
///
/// Matches keep the order of `candidates`; there is no ranking. An empty (or
/// all-whitespace) query matches everything.
///
/// # Example
///
/// ```
/// use budget_lib::prefix_filter;
///
/// let items = ["Apple", "Apricot", "Avocado"];
/// let matches: Vec<_> = prefix_filter("ap", &items).iter().map(|m| items[m.index]).collect();
/// assert_eq!(matches, ["Apple", "Apricot"]);
/// ```
pub fn prefix_filter<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<FilterMatch> {
    let needle = normalize(query);

    candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| {
            needle.is_empty() || candidate.as_ref().to_lowercase().starts_with(&needle)
        })
        .map(|(index, _)| FilterMatch { index })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels<'a>(query: &str, items: &[&'a str]) -> Vec<&'a str> {
        prefix_filter(query, items)
            .into_iter()
            .map(|m| items[m.index])
            .collect()
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  ApRi \t"), "apri");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let items = ["Lion", "Tiger", "Elephant"];
        assert_eq!(labels("", &items), items);
        assert_eq!(labels("  ", &items), items);
    }

    #[test]
    fn test_prefix_only() {
        let items = ["Honda Civic", "Toyota Corolla", "Civic Type R"];
        // "civic" appears inside "Honda Civic" but only prefixes count
        assert_eq!(labels("civic", &items), ["Civic Type R"]);
    }

    #[test]
    fn test_padded_query_matches_multi_word_candidate() {
        let items = ["French Bean", "Fennel", "Fig"];
        assert_eq!(labels(" french b ", &items), ["French Bean"]);
    }

    #[test]
    fn test_no_matches() {
        assert!(labels("z", &["Apple", "Apricot"]).is_empty());
        assert!(labels("a", &[] as &[&str]).is_empty());
    }

    #[test]
    fn test_query_longer_than_candidate() {
        assert!(labels("kiwis", &["Kiwi"]).is_empty());
    }
}
