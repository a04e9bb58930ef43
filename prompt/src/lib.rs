//! Frequency-ranked prefix completion over a static vocabulary.
//!
//! The vocabulary is loaded once through [`DictionaryBuilder`], frozen into a
//! lexicographically sorted array, and partitioned by leading characters into
//! a depth-bounded radix index. A built [`Dictionary`] is immutable, so any
//! number of threads may query it concurrently without locking.

mod indexer;
pub mod interface;
pub mod models;
mod search;
mod store;

pub use interface::{PromptError, Result};
pub use search::MAX_SELECTION;
pub use store::{read_line, Dictionary, DictionaryBuilder};
