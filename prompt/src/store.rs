//! Vocabulary store: the loading-time builder and the built dictionary.
//!
//! `DictionaryBuilder` owns all in-progress state (the append cursor and the
//! longest-word tracker) and is consumed by [`DictionaryBuilder::build`]. The
//! resulting [`Dictionary`] exposes no mutation API, so "append after build"
//! and "query before build" are unrepresentable, and a shared
//! `Arc<Dictionary>` serves concurrent readers with no locking.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::indexer::{PrefixIndex, INDEX_DEPTH_LIMIT};
use crate::interface::{PromptError, Result};
use crate::models::Word;
use crate::search;

/// Accumulates vocabulary entries up to a fixed capacity declared up front.
pub struct DictionaryBuilder {
    words: Vec<Word>,
    capacity: usize,
    longest: usize,
}

impl DictionaryBuilder {
    /// Creates a builder for a vocabulary of at most `capacity` entries.
    /// Zero capacity is an [`PromptError::InvalidArgument`] error.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(PromptError::InvalidArgument(
                "cannot create a dictionary with non-positive capacity".into(),
            ));
        }
        Ok(Self {
            words: Vec::with_capacity(capacity),
            capacity,
            longest: 0,
        })
    }

    /// An empty, already-frozen vocabulary; used by the loader when the
    /// input declares zero words.
    fn empty() -> Self {
        Self {
            words: Vec::new(),
            capacity: 0,
            longest: 0,
        }
    }

    /// Appends one entry, normalizing `text` to lowercase.
    ///
    /// Invalid entries are skipped with a diagnostic and loading continues:
    /// store already full, empty text, text with characters outside `a-z`,
    /// or frequency below 1.
    pub fn add_word(&mut self, text: &str, frequency: i64) {
        if self.words.len() >= self.capacity {
            eprintln!("Dictionary is packed already, cannot add more words");
            return;
        }
        let text = text.to_lowercase();
        if text.is_empty() {
            eprintln!("Empty word skipped");
            return;
        }
        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            eprintln!("Word '{text}' skipped: contains characters outside a-z");
            return;
        }
        if frequency < 1 {
            eprintln!("Unused word '{text}' skipped (frequency < 1)");
            return;
        }
        self.longest = self.longest.max(text.len());
        self.words.push(Word::new(text, frequency as u64));
    }

    /// Number of entries accepted so far.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Freezes the store: sorts the words lexicographically, builds the
    /// prefix index down to `min(longest word length, 4)`, and returns the
    /// immutable dictionary.
    pub fn build(mut self) -> Dictionary {
        self.words.sort_by(|a, b| a.text.cmp(&b.text));
        let depth = self.longest.min(INDEX_DEPTH_LIMIT);
        let index = PrefixIndex::build(&self.words, depth);
        Dictionary {
            words: self.words,
            index,
        }
    }
}

/// A built, immutable dictionary. See [`Dictionary::selection`] for the
/// query contract.
#[derive(Debug)]
pub struct Dictionary {
    words: Vec<Word>,
    index: PrefixIndex,
}

impl Dictionary {
    /// Loads the dictionary section of the batch input format: a count line
    /// `N` followed by N lines of `<word> <frequency>`, then builds. The
    /// reader is left positioned after the last word line so callers can
    /// keep reading (batch mode's query section follows it).
    ///
    /// Malformed count or word lines are fatal; the error propagates and no
    /// partial dictionary is ever returned.
    pub fn from_reader<R: BufRead>(reader: &mut R) -> Result<Self> {
        let count_line = read_line(reader)?.ok_or_else(|| {
            PromptError::Format("Unexpected end of input, expected dictionary length N".into())
        })?;
        let count: usize = count_line.trim().parse().map_err(|_| {
            PromptError::Format(format!(
                "Cannot resolve dictionary length N, trying to parse '{count_line}'"
            ))
        })?;

        let mut builder = if count == 0 {
            DictionaryBuilder::empty()
        } else {
            DictionaryBuilder::with_capacity(count)?
        };
        for position in 0..count {
            let line = read_line(reader)?.ok_or_else(|| {
                PromptError::Format(format!("Unexpected end of input at word {position}"))
            })?;
            let columns: Vec<&str> = line.split(' ').collect();
            if columns.len() != 2 {
                return Err(PromptError::Format(format!(
                    "Cannot resolve word at {position} position: it does not contain exactly 2 columns"
                )));
            }
            let frequency: i64 = columns[1].parse().map_err(|_| {
                PromptError::Format(format!(
                    "Cannot resolve word at {position} position: it has non-numeric frequency value ({})",
                    columns[1]
                ))
            })?;
            builder.add_word(columns[0], frequency);
        }
        Ok(builder.build())
    }

    /// Loads a dictionary from a vocabulary file in the batch input format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::from_reader(&mut reader)
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Up to [`crate::MAX_SELECTION`] completions of `prefix`, most
    /// frequent first, frequency ties broken lexicographically. The empty
    /// prefix and a prefix with zero matches both return the single-element
    /// empty-string sentinel.
    pub fn selection(&self, prefix: &str) -> Vec<String> {
        search::select(&self.words, &self.index, prefix)
    }
}

/// Reads one line, stripping the trailing newline (and `\r`). `None` on end
/// of input. Shared by the loader and the line-based front-ends, which all
/// read the same newline-terminated records.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
