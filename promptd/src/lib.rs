//! Front-ends for the `prompt` completion engine: an offline batch mode on
//! stdin, a line-protocol TCP server, and a matching interactive client.

pub mod batch;
pub mod client;
pub mod protocol;
pub mod server;
