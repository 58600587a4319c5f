//! Interactive WebSocket command-line client.
//!
//! Connects to a `ws://` or `wss://` endpoint, sends each line typed at the
//! prompt as a text frame and prints incoming text frames to the terminal.

pub mod config;
pub mod domain;
pub mod error;
pub mod formatter;
pub mod prompt;
pub mod runner;
pub mod session;
pub mod termination;
pub mod ui;

pub use config::ClientConfig;
pub use error::ClientError;
pub use runner::run_client;
pub use termination::{ShutdownReason, TerminationSignal};
