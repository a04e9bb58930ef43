//! Interactive client: reads one prefix per stdin line, sends it as a `get`
//! request, and prints the returned completions. A bad-request response is
//! reported for that query without ending the session.

use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpStream;

use anyhow::{Context, Result};
use prompt::read_line;

use crate::protocol::BAD_REQUEST;

pub fn run(host: &str, port: u16) -> Result<()> {
    let stream = TcpStream::connect((host, port))
        .with_context(|| format!("Cannot connect to {host}:{port}"))?;
    let mut responses = BufReader::new(stream.try_clone()?);
    let mut requests = stream;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let prefix = line?;
        writeln!(requests, "get {prefix}")?;

        let header = read_line(&mut responses)?
            .context("Server closed the connection")?;
        if header == BAD_REQUEST {
            eprintln!("Bad request: '{prefix}'");
            continue;
        }
        let count: usize = header
            .trim()
            .parse()
            .with_context(|| format!("Malformed response count '{header}'"))?;
        for _ in 0..count {
            let word = read_line(&mut responses)?
                .context("Server closed the connection mid-response")?;
            println!("{word}");
        }
    }
    Ok(())
}
