//! Stable deduplication: walk in order, keep the first item per key, drop the
//! rest. Surviving items keep their relative order.

use std::collections::HashSet;
use std::hash::Hash;

use crate::extractor::CourseListing;

pub fn dedup_by_key<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Deduplicates listings by url; the first title seen for a url wins.
pub fn dedup_listings(listings: impl IntoIterator<Item = CourseListing>) -> Vec<CourseListing> {
    dedup_by_key(listings, |listing| listing.url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, url: &str) -> CourseListing {
        CourseListing::new(title, url)
    }

    #[test]
    fn test_keeps_first_occurrence() {
        let deduped = dedup_listings(vec![
            listing("First", "https://a/1"),
            listing("Second", "https://a/2"),
            listing("First again", "https://a/1"),
            listing("Third", "https://a/3"),
            listing("Second again", "https://a/2"),
        ]);

        let titles: Vec<&str> = deduped.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let input = vec![
            listing("a", "https://x/a"),
            listing("b", "https://x/b"),
            listing("a2", "https://x/a"),
            listing("c", "https://x/c"),
            listing("b2", "https://x/b"),
            listing("a3", "https://x/a"),
        ];

        let once = dedup_listings(input);
        let twice = dedup_listings(once.clone());

        let pairs = |v: &[CourseListing]| {
            v.iter()
                .map(|l| (l.title.clone(), l.url.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(pairs(&once), pairs(&twice));
        assert_eq!(once.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_listings(Vec::new()).is_empty());
    }

    #[test]
    fn test_dedup_by_arbitrary_key() {
        let words = dedup_by_key(vec!["Go", "rust", "GO", "Rust", "zig"], |w| w.to_lowercase());
        assert_eq!(words, vec!["Go", "rust", "zig"]);
    }
}
