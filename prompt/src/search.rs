//! Query engine: prefix walk plus rank-ordered bucket scan.

use crate::indexer::PrefixIndex;
use crate::models::Word;

/// Maximum number of completions returned for one prefix.
pub const MAX_SELECTION: usize = 10;

/// Runs one completion query against the built structures.
///
/// The empty prefix and a prefix with zero matches both yield the
/// single-element empty-string sentinel (callers print it as one blank
/// line). The two cases are deliberately indistinguishable; the protocol
/// depends on it.
pub(crate) fn select(words: &[Word], index: &PrefixIndex, prefix: &str) -> Vec<String> {
    if prefix.is_empty() {
        return vec![String::new()];
    }

    // The probe is the prefix truncated to the index depth; the untruncated
    // prefix still filters the bucket below. Bytes outside a-z (uppercase,
    // digits, multi-byte characters) can match no stored word and walk to
    // nothing.
    let probe_len = prefix.len().min(index.depth());
    let node = match index.walk(&prefix.as_bytes()[..probe_len]) {
        Some(node) => node,
        None => return vec![String::new()],
    };

    let mut selection = Vec::new();
    for &id in node.bucket() {
        let word = &words[id as usize];
        if word.text.starts_with(prefix) {
            selection.push(word.text.clone());
            if selection.len() == MAX_SELECTION {
                break;
            }
        }
    }
    if selection.is_empty() {
        selection.push(String::new());
    }
    selection
}

#[cfg(test)]
mod tests {
    use crate::store::{Dictionary, DictionaryBuilder};

    fn dictionary(entries: &[(&str, i64)]) -> Dictionary {
        let mut builder = DictionaryBuilder::with_capacity(entries.len()).expect("positive capacity");
        for &(text, frequency) in entries {
            builder.add_word(text, frequency);
        }
        builder.build()
    }

    #[test]
    fn test_ranked_by_frequency_then_text() {
        let dict = dictionary(&[("a", 5), ("ab", 10), ("abc", 3), ("b", 1)]);
        assert_eq!(dict.selection("a"), vec!["ab", "a", "abc"]);
        assert_eq!(dict.selection("ab"), vec!["ab", "abc"]);
        assert_eq!(dict.selection("b"), vec!["b"]);
    }

    #[test]
    fn test_frequency_tie_breaks_lexicographically() {
        let dict = dictionary(&[("cat", 2), ("car", 2)]);
        assert_eq!(dict.selection("ca"), vec!["car", "cat"]);
    }

    #[test]
    fn test_no_match_yields_sentinel() {
        let dict = dictionary(&[("a", 5), ("ab", 10)]);
        assert_eq!(dict.selection("c"), vec![""]);
        assert_eq!(dict.selection("abc"), vec![""]);
    }

    #[test]
    fn test_empty_prefix_yields_sentinel() {
        let dict = dictionary(&[("a", 5)]);
        assert_eq!(dict.selection(""), vec![""]);
    }

    #[test]
    fn test_prefix_outside_alphabet_yields_sentinel() {
        let dict = dictionary(&[("apple", 5)]);
        assert_eq!(dict.selection("A"), vec![""]);
        assert_eq!(dict.selection("app1"), vec![""]);
        assert_eq!(dict.selection("äpfel"), vec![""]);
    }

    #[test]
    fn test_prefix_longer_than_index_depth() {
        // Depth caps at 4, so "applica" walks to the "appl" node and the
        // full prefix filters the bucket from there.
        let dict = dictionary(&[("applicable", 3), ("application", 8), ("apply", 20)]);
        assert_eq!(dict.selection("applica"), vec!["application", "applicable"]);
        assert_eq!(dict.selection("applicat"), vec!["application"]);
    }

    #[test]
    fn test_selection_caps_at_ten() {
        // 15 words share "app" at distinct frequencies; only the 10 most
        // frequent come back, strictly ordered.
        let entries: Vec<(String, i64)> = (0..15)
            .map(|i| (format!("app{}", (b'a' + i) as char), i64::from(i) + 1))
            .collect();
        let borrowed: Vec<(&str, i64)> = entries.iter().map(|(t, f)| (t.as_str(), *f)).collect();
        let dict = dictionary(&borrowed);

        let selection = dict.selection("app");
        assert_eq!(selection.len(), 10);
        assert_eq!(selection[0], "appo"); // frequency 15
        assert_eq!(selection[9], "appf"); // frequency 6
    }

    #[test]
    fn test_duplicate_texts_rank_as_two_entries() {
        let dict = dictionary(&[("ab", 3), ("ab", 7), ("ax", 5)]);
        assert_eq!(dict.selection("ab"), vec!["ab", "ab"]);
        assert_eq!(dict.selection("a"), vec!["ab", "ax", "ab"]);
    }
}
