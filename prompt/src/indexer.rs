//! Depth-bounded radix partitioning of the sorted vocabulary.
//!
//! The sorted word array is split into an arena of nodes, one per stored
//! prefix of up to [`INDEX_DEPTH_LIMIT`] characters. Each node covers a
//! contiguous half-open range of the array; its children partition that range
//! by the next character, in alphabet order. Every node also carries a bucket
//! of its range's word ids in rank order, so a query only scans words that
//! already share the probed prefix.

use crate::models::Word;

/// Number of letters in the indexed alphabet (`a..=z`).
pub(crate) const ALPHABET_LEN: usize = 26;

/// Upper bound for the index depth. A deeper index costs more build time and
/// more nodes but shortens the bucket scanned per query. The effective depth
/// is `min(longest word length, INDEX_DEPTH_LIMIT)`.
pub(crate) const INDEX_DEPTH_LIMIT: usize = 4;

/// Child-slot sentinel for a letter with an empty sub-range.
const NO_CHILD: u32 = u32::MAX;

/// One partition of the sorted word array: all stored words sharing a
/// specific prefix of a specific depth.
#[derive(Debug)]
pub(crate) struct IndexNode {
    /// Half-open range `[start, end)` into the sorted word array.
    start: u32,
    end: u32,
    /// Word ids of `[start, end)`, frequency descending, text ascending on
    /// ties.
    bucket: Vec<u32>,
    /// Child table indexed by `byte - b'a'`; `None` on nodes at the depth
    /// limit.
    children: Option<[u32; ALPHABET_LEN]>,
}

impl IndexNode {
    pub(crate) fn bucket(&self) -> &[u32] {
        &self.bucket
    }

    #[cfg(test)]
    fn range(&self) -> (usize, usize) {
        (self.start as usize, self.end as usize)
    }
}

/// The arena of partitions. Node 0 is the root and always exists, covering
/// the whole (possibly empty) array.
#[derive(Debug)]
pub(crate) struct PrefixIndex {
    nodes: Vec<IndexNode>,
    depth: usize,
}

impl PrefixIndex {
    /// Builds the index over `words`, which must already be sorted
    /// lexicographically by text. An empty array builds a root with an empty
    /// range and bucket.
    pub(crate) fn build(words: &[Word], depth: usize) -> Self {
        let mut nodes = vec![IndexNode {
            start: 0,
            end: words.len() as u32,
            bucket: Vec::new(),
            children: None,
        }];
        split(&mut nodes, 0, 0, words, depth);

        // Second pass, independent of the split: every node (leaf and
        // internal) ranks its whole range.
        for node in &mut nodes {
            let mut bucket: Vec<u32> = (node.start..node.end).collect();
            bucket.sort_by(|&a, &b| Word::rank_cmp(&words[a as usize], &words[b as usize]));
            node.bucket = bucket;
        }

        Self { nodes, depth }
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Follows one child per probe byte starting from the root. Returns
    /// `None` as soon as a byte falls outside `a-z` or its sub-range holds
    /// no words.
    pub(crate) fn walk(&self, probe: &[u8]) -> Option<&IndexNode> {
        let mut node = &self.nodes[0];
        for &byte in probe {
            if !byte.is_ascii_lowercase() {
                return None;
            }
            let children = node.children.as_ref()?;
            let child = children[usize::from(byte - b'a')];
            if child == NO_CHILD {
                return None;
            }
            node = &self.nodes[child as usize];
        }
        Some(node)
    }
}

/// Partitions `nodes[node_id]` into per-letter children and recurses until
/// `max_depth` (recursion depth is bounded by [`INDEX_DEPTH_LIMIT`]).
///
/// Words no longer than the current depth cannot match any letter at this
/// position; they are skipped over and belong to this node's bucket only.
/// Because the array is sorted, those words sit at the start of the range and
/// each letter's sub-range is found by a forward scan from the end of the
/// previous one: partitions are contiguous, ordered, and non-overlapping.
fn split(nodes: &mut Vec<IndexNode>, node_id: usize, depth: usize, words: &[Word], max_depth: usize) {
    if depth >= max_depth {
        return;
    }
    let start = nodes[node_id].start as usize;
    let end = nodes[node_id].end as usize;

    let mut children = [NO_CHILD; ALPHABET_LEN];
    let mut pos = start;
    while pos < end && words[pos].text.len() <= depth {
        pos += 1;
    }
    for (slot, child_slot) in children.iter_mut().enumerate() {
        let letter = b'a' + slot as u8;
        let child_start = pos;
        while pos < end && words[pos].text.as_bytes()[depth] == letter {
            pos += 1;
        }
        if pos == child_start {
            continue;
        }
        let child_id = nodes.len();
        nodes.push(IndexNode {
            start: child_start as u32,
            end: pos as u32,
            bucket: Vec::new(),
            children: None,
        });
        *child_slot = child_id as u32;
        split(nodes, child_id, depth + 1, words, max_depth);
    }
    nodes[node_id].children = Some(children);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_words(entries: &[(&str, u64)]) -> Vec<Word> {
        let mut words: Vec<Word> = entries
            .iter()
            .map(|&(text, frequency)| Word::new(text, frequency))
            .collect();
        words.sort_by(|a, b| a.text.cmp(&b.text));
        words
    }

    fn texts<'a>(words: &'a [Word], node: &IndexNode) -> Vec<&'a str> {
        node.bucket()
            .iter()
            .map(|&id| words[id as usize].text.as_str())
            .collect()
    }

    #[test]
    fn test_empty_vocabulary_builds_empty_root() {
        let index = PrefixIndex::build(&[], 0);
        let root = index.walk(b"").expect("root always exists");
        assert!(root.bucket().is_empty());
        assert!(index.walk(b"a").is_none());
    }

    #[test]
    fn test_child_ranges_partition_the_parent() {
        let words = sorted_words(&[("a", 5), ("ab", 10), ("abc", 3), ("b", 1)]);
        let index = PrefixIndex::build(&words, 3);

        assert_eq!(index.walk(b"a").unwrap().range(), (0, 3));
        assert_eq!(index.walk(b"b").unwrap().range(), (3, 4));
        // "a" itself (length 1) is excluded from the depth-2 child while
        // remaining in its parent's bucket.
        assert_eq!(index.walk(b"ab").unwrap().range(), (1, 3));
        assert_eq!(index.walk(b"abc").unwrap().range(), (2, 3));
    }

    #[test]
    fn test_buckets_are_rank_ordered() {
        let words = sorted_words(&[("a", 5), ("ab", 10), ("abc", 3), ("b", 1)]);
        let index = PrefixIndex::build(&words, 3);

        let root = index.walk(b"").unwrap();
        assert_eq!(texts(&words, root), vec!["ab", "a", "abc", "b"]);
        assert_eq!(texts(&words, index.walk(b"a").unwrap()), vec!["ab", "a", "abc"]);
        assert_eq!(texts(&words, index.walk(b"ab").unwrap()), vec!["ab", "abc"]);
    }

    #[test]
    fn test_walk_rejects_bytes_outside_alphabet() {
        let words = sorted_words(&[("abc", 1)]);
        let index = PrefixIndex::build(&words, 3);
        assert!(index.walk(b"A").is_none());
        assert!(index.walk(b"a1").is_none());
        assert!(index.walk(&[0xC3]).is_none());
    }

    #[test]
    fn test_walk_stops_at_depth_limit() {
        let words = sorted_words(&[("abcdef", 1)]);
        let index = PrefixIndex::build(&words, 4);
        assert!(index.walk(b"abcd").is_some());
        // Probes longer than the depth must be truncated by the caller; the
        // depth-limit node has no children at all.
        assert!(index.walk(b"abcde").is_none());
    }

    #[test]
    fn test_duplicate_boundary_words_all_stay_in_parent() {
        // Two copies of "ab" sit exactly at the depth-2 boundary; both are
        // excluded from the "abc" child and kept in the "ab" bucket.
        let words = sorted_words(&[("ab", 4), ("ab", 2), ("abc", 9)]);
        let index = PrefixIndex::build(&words, 3);

        assert_eq!(index.walk(b"abc").unwrap().range(), (2, 3));
        assert_eq!(texts(&words, index.walk(b"ab").unwrap()), vec!["abc", "ab", "ab"]);
    }

    #[test]
    fn test_missing_letter_has_no_node() {
        let words = sorted_words(&[("apple", 1), ("cherry", 2)]);
        let index = PrefixIndex::build(&words, 4);
        assert!(index.walk(b"b").is_none());
        assert!(index.walk(b"ap").is_some());
    }
}
