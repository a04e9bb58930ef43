//! Synthetic vocabulary generator for benchmarks and manual server testing.
//!
//! Emits the batch input format: a count line, `<word> <frequency>` lines,
//! and optionally a query section (count line + prefix lines). Frequencies
//! fall off with rank so the ranking paths see realistic skew.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::*;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of words to generate
    #[arg(short, long, default_value_t = 100_000)]
    count: usize,

    /// Maximum word length
    #[arg(long, default_value_t = 12)]
    max_len: usize,

    /// RNG seed, for reproducible files
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Also emit a query section with this many prefixes
    #[arg(short, long)]
    queries: Option<usize>,

    /// Output path
    #[arg(short, long, default_value = "vocabulary.txt")]
    out: PathBuf,
}

fn random_word(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    (0..len)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let file = File::create(&args.out)
        .with_context(|| format!("Cannot create '{}'", args.out.display()))?;
    let mut out = BufWriter::new(file);

    let bar = ProgressBar::new(args.count as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")?);

    writeln!(out, "{}", args.count)?;
    let mut words = Vec::with_capacity(args.count);
    for rank in 0..args.count {
        let word = random_word(&mut rng, args.max_len);
        // Zipf-flavored: frequency decays with rank, with a little jitter.
        let frequency = (args.count / (rank + 1)).max(1) + rng.gen_range(0..10);
        writeln!(out, "{word} {frequency}")?;
        words.push(word);
        bar.inc(1);
    }
    bar.finish_with_message("words written");

    if let Some(queries) = args.queries {
        // A zero-word vocabulary has no prefixes to sample.
        let queries = if words.is_empty() { 0 } else { queries };
        writeln!(out, "{queries}")?;
        for _ in 0..queries {
            // Prefixes of stored words, so most queries hit something.
            let Some(word) = words.choose(&mut rng) else {
                break;
            };
            let len = rng.gen_range(1..=word.len());
            writeln!(out, "{}", &word[..len])?;
        }
    }
    out.flush()?;

    eprintln!("Wrote '{}'", args.out.display());
    Ok(())
}
