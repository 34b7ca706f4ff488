//! Name search over catalog lists

/// Anything listed under a display name
pub trait Named {
    fn name(&self) -> &str;
}

/// Case-insensitive substring test. An empty query matches everything.
pub fn name_matches(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Items whose name contains `query`, in their original order
pub fn filter_by_name<'a, T: Named>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| name_matches(item.name(), query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str);

    impl Named for Item {
        fn name(&self) -> &str {
            self.0
        }
    }

    const ITEMS: [Item; 3] = [
        Item("Fresh Tomatoes"),
        Item("Organic Apples"),
        Item("Sweet Corn"),
    ];

    fn names(found: Vec<&Item>) -> Vec<&'static str> {
        found.into_iter().map(|i| i.0).collect()
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        assert_eq!(
            names(filter_by_name(&ITEMS, "")),
            vec!["Fresh Tomatoes", "Organic Apples", "Sweet Corn"]
        );
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert_eq!(names(filter_by_name(&ITEMS, "TOM")), vec!["Fresh Tomatoes"]);
        assert_eq!(names(filter_by_name(&ITEMS, "or")), vec!["Organic Apples", "Sweet Corn"]);
    }

    #[test]
    fn test_no_match_and_untrimmed_query() {
        assert!(filter_by_name(&ITEMS, "mango").is_empty());
        // Whitespace is part of the term
        assert_eq!(names(filter_by_name(&ITEMS, "t c")), vec!["Sweet Corn"]);
        assert!(filter_by_name(&ITEMS, " tomatoes ").is_empty());
    }
}
