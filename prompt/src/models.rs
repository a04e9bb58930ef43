//! Core data model: a vocabulary word with its usage frequency.

use std::cmp::Ordering;

/// A single vocabulary entry.
///
/// Identity is by `text` only, mirroring how the store treats entries:
/// duplicate texts are not merged and rank as independent entries.
#[derive(Debug, Clone)]
pub struct Word {
    pub text: String,
    pub frequency: u64,
}

impl Word {
    pub fn new(text: impl Into<String>, frequency: u64) -> Self {
        Self {
            text: text.into(),
            frequency,
        }
    }

    /// Rank order used for node buckets: most frequent first, equal
    /// frequencies broken by text ascending.
    pub fn rank_cmp(a: &Word, b: &Word) -> Ordering {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.text.cmp(&b.text))
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_orders_by_frequency_descending() {
        let low = Word::new("aaa", 2);
        let high = Word::new("zzz", 9);
        assert_eq!(Word::rank_cmp(&high, &low), Ordering::Less);
        assert_eq!(Word::rank_cmp(&low, &high), Ordering::Greater);
    }

    #[test]
    fn test_rank_breaks_frequency_ties_by_text() {
        let car = Word::new("car", 2);
        let cat = Word::new("cat", 2);
        assert_eq!(Word::rank_cmp(&car, &cat), Ordering::Less);
    }

    #[test]
    fn test_equality_ignores_frequency() {
        assert_eq!(Word::new("cat", 1), Word::new("cat", 100));
        assert_ne!(Word::new("cat", 1), Word::new("car", 1));
    }
}
