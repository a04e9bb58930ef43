//! Bounded async TCP front-end over a shared, immutable dictionary.
//!
//! One task per connection, capped by a semaphore; each read and write is
//! guarded by a timeout so a stalled peer cannot pin a permit forever. The
//! dictionary never mutates after build, so tasks share it through a plain
//! `Arc` with no locking.

use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use prompt::Dictionary;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{Notify, Semaphore};
use tokio::time::timeout;

use crate::protocol;

/// Write timeout per response; responses are at most eleven short lines.
const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ServerConfig {
    pub port: u16,
    pub max_connections: usize,
    pub idle_timeout: Duration,
}

pub fn run(dictionary: Dictionary, config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let listener = TcpListener::bind(("0.0.0.0", config.port))
            .await
            .with_context(|| format!("Cannot listen on port {}", config.port))?;
        eprintln!(
            "Server started on port {}. Type 'exit' to stop it and close all connections",
            config.port
        );
        serve(listener, Arc::new(dictionary), config, spawn_exit_watcher()).await
    })
}

/// Accept loop over an already-bound listener; runs until `shutdown` fires.
pub async fn serve(
    listener: TcpListener,
    dictionary: Arc<Dictionary>,
    config: ServerConfig,
    shutdown: Arc<Notify>,
) -> Result<()> {
    let permits = Arc::new(Semaphore::new(config.max_connections));

    loop {
        tokio::select! {
            () = shutdown.notified() => break,
            accepted = listener.accept() => {
                let (socket, peer) = accepted.context("Accept failed")?;
                // Acquiring here, not in the task, is what bounds the
                // server: at capacity, new connections wait in the listener
                // backlog.
                let permit = Arc::clone(&permits).acquire_owned().await?;
                let dictionary = Arc::clone(&dictionary);
                let idle_timeout = config.idle_timeout;
                tokio::spawn(async move {
                    if let Err(err) = handle_connection(socket, &dictionary, idle_timeout).await {
                        eprintln!("Connection from {peer} closed: {err:#}");
                    }
                    drop(permit);
                });
            }
        }
    }

    eprintln!("Server stopped");
    Ok(())
}

/// Notified once a line equal to `exit` (case-insensitive) arrives on stdin.
/// A dedicated thread keeps the async side free of blocking stdin reads.
fn spawn_exit_watcher() -> Arc<Notify> {
    let notify = Arc::new(Notify::new());
    let tx = Arc::clone(&notify);
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) if line.trim().eq_ignore_ascii_case("exit") => {
                    tx.notify_one();
                    break;
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
    notify
}

/// Serves one connection until the peer closes it, a request line fails to
/// arrive within the idle timeout, or a write stalls.
async fn handle_connection(
    socket: TcpStream,
    dictionary: &Dictionary,
    idle_timeout: Duration,
) -> Result<()> {
    let (read_half, write_half) = socket.into_split();
    let mut lines = BufReader::new(read_half).lines();
    let mut writer = BufWriter::new(write_half);

    loop {
        let line = match timeout(idle_timeout, lines.next_line()).await {
            Ok(read) => read.context("Read failed")?,
            Err(_) => bail!("idle for {idle_timeout:?}"),
        };
        let Some(line) = line else {
            break; // peer closed the connection
        };
        let response = protocol::respond(dictionary, &line);
        timeout(WRITE_TIMEOUT, async {
            writer.write_all(response.as_bytes()).await?;
            writer.flush().await
        })
        .await
        .context("Write timed out")??;
    }
    Ok(())
}
