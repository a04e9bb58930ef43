//! Front-ends for the `prompt` completion engine: an offline batch mode on
//! stdin (the default), a line-protocol TCP server, and a matching
//! interactive client.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use prompt::Dictionary;
use promptd::{batch, client, server};

#[derive(Parser, Debug)]
#[command(name = "promptd", about = "Frequency-ranked prefix completion")]
struct Args {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Serve completions over TCP from a vocabulary file
    Serve {
        /// Vocabulary file in the batch input format (count line + word lines)
        #[arg(short, long)]
        dictionary: PathBuf,

        #[arg(short, long, default_value_t = 10013)]
        port: u16,

        /// Maximum concurrent connections
        #[arg(long, default_value_t = 64)]
        max_connections: usize,

        /// Per-connection idle timeout, in seconds
        #[arg(long, default_value_t = 300)]
        idle_timeout: u64,
    },
    /// Query a running server, one prefix per stdin line
    Client {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value_t = 10013)]
        port: u16,
    },
}

fn main() -> Result<()> {
    match Args::parse().mode {
        None => batch::run(),
        Some(Mode::Serve {
            dictionary,
            port,
            max_connections,
            idle_timeout,
        }) => {
            eprintln!("Reading dictionary from '{}'...", dictionary.display());
            let dictionary = Dictionary::from_file(&dictionary)?;
            eprintln!("Loaded {} words", dictionary.len());
            server::run(
                dictionary,
                server::ServerConfig {
                    port,
                    max_connections,
                    idle_timeout: Duration::from_secs(idle_timeout),
                },
            )
        }
        Some(Mode::Client { host, port }) => client::run(&host, port),
    }
}
