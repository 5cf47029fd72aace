use crate::PropertyQuery;

/// Numbers the requests of a search page.
///
/// Only the response to the most recent request
/// is accepted, so the last submitted search wins
/// no matter in which order the responses arrive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchGenerations {
    latest: u64,
}

impl SearchGenerations {
    /// Starts a new request and returns its number.
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    #[must_use]
    pub const fn is_latest(&self, request: u64) -> bool {
        self.latest == request
    }
}

/// Filters to start the search page with.
///
/// A non-blank `?q=` text replaces the stored filters
/// with a text-only query. Otherwise the filters of the
/// last search are restored.
#[must_use]
pub fn initial_query(text: Option<&str>, stored: Option<PropertyQuery>) -> PropertyQuery {
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        Some(text) => PropertyQuery {
            text: Some(text.to_string()),
            ..Default::default()
        },
        None => stored.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_submitted_search_wins() {
        let mut generations = SearchGenerations::default();
        let first = generations.next();
        let second = generations.next();
        assert!(first < second);
        // The response of the first search arrives last
        assert!(generations.is_latest(second));
        assert!(!generations.is_latest(first));
    }

    #[test]
    fn nothing_is_latest_before_the_first_search() {
        let generations = SearchGenerations::default();
        assert!(!generations.is_latest(1));
    }

    #[test]
    fn text_parameter_replaces_stored_filters() {
        let stored = PropertyQuery {
            text: Some("loft".into()),
            min_price: Some(100_000.0),
            max_price: None,
            bedrooms: Some(2),
        };
        let query = initial_query(Some(" villa "), Some(stored));
        assert_eq!(
            query,
            PropertyQuery {
                text: Some("villa".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn restore_stored_filters() {
        let stored = PropertyQuery {
            bedrooms: Some(3),
            ..Default::default()
        };
        assert_eq!(initial_query(None, Some(stored.clone())), stored);
        assert_eq!(initial_query(Some("  "), Some(stored.clone())), stored);
        assert_eq!(initial_query(None, None), PropertyQuery::default());
    }
}
