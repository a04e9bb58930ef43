//! Public error surface for dictionary loading and building.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = PromptError> = std::result::Result<T, E>;

/// Errors surfaced while loading or building a dictionary.
///
/// Entry-level validation problems (empty text, text outside `a-z`,
/// non-positive frequency, store already full) are deliberately not errors:
/// the entry is skipped with a diagnostic and loading continues. Format
/// problems abort the whole load so a partial dictionary is never served.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Malformed batch input: bad count line, wrong column count, or a
    /// non-numeric frequency.
    #[error("Dictionary format error: {0}")]
    Format(String),
    /// Structurally invalid builder request, e.g. zero capacity.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
