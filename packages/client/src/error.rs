//! Error types for the WebSocket client.

use rustyline::error::ReadlineError;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Handshake with the endpoint failed
    #[error("failed to connect to {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: Box<tungstenite::Error>,
    },

    /// The line editor could not be initialized
    #[error("line editor error: {0}")]
    Readline(#[from] ReadlineError),

    /// The line editor thread went away before it was ready
    #[error("line editor unavailable: {0}")]
    PromptUnavailable(String),
}
