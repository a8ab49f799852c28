/// Case-insensitive substring matcher built from raw search text.
///
/// The text is used as typed: no trimming, no tokenising. An empty query
/// matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, haystack: &str) -> bool {
        self.is_empty() || haystack.to_lowercase().contains(&self.needle)
    }

    /// Like [`matches`](Self::matches), but an absent field only matches the
    /// empty query.
    pub fn matches_opt(&self, haystack: Option<&str>) -> bool {
        match haystack {
            Some(text) => self.matches(text),
            None => self.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_everything() {
        let query = SearchQuery::new("");
        assert!(query.is_empty());
        assert!(query.matches(""));
        assert!(query.matches("anything"));
        assert!(query.matches_opt(None));
    }

    #[test]
    fn test_case_insensitive() {
        let query = SearchQuery::new("ReAcT");
        assert!(query.matches("Intro to react"));
        assert!(query.matches("REACT NATIVE"));
        assert!(!query.matches("Vue"));
    }

    #[test]
    fn test_whitespace_is_significant() {
        let query = SearchQuery::new(" ");
        assert!(!query.is_empty());
        assert!(query.matches("two words"));
        assert!(!query.matches("oneword"));
    }

    #[test]
    fn test_absent_field_does_not_match_text() {
        let query = SearchQuery::new("x");
        assert!(!query.matches_opt(None));
        assert!(query.matches_opt(Some("xyz")));
    }
}
