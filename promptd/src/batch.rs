//! Offline batch mode: dictionary and queries on stdin, completions on
//! stdout.
//!
//! Input: `N`, then N lines of `<word> <frequency>`, then `M`, then M prefix
//! lines. Each query prints up to ten result lines; the sentinel prints as a
//! single blank line. Any format problem aborts the whole run before a
//! single query is answered.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use prompt::{read_line, Dictionary};

pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let dictionary = Dictionary::from_reader(&mut reader)?;

    let count_line = read_line(&mut reader)?
        .context("Unexpected end of input, expected queries count M")?;
    let queries: usize = count_line.trim().parse().with_context(|| {
        format!("Cannot resolve queries count M, trying to parse '{count_line}'")
    })?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for query in 0..queries {
        let prefix = read_line(&mut reader)?
            .with_context(|| format!("Unexpected end of input at query {query}"))?;
        for word in dictionary.selection(&prefix) {
            writeln!(out, "{word}")?;
        }
    }
    out.flush()?;
    Ok(())
}
