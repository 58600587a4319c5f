//! Domain logic for client-side operations.
//!
//! This module contains pure functions that implement business logic
//! without side effects, making them easy to test.

use tokio_tungstenite::tungstenite::protocol::Message;

const PLAIN_SCHEME: &str = "ws://";
const SECURE_SCHEME: &str = "wss://";

/// Check if the address already carries a WebSocket scheme.
pub fn has_websocket_scheme(address: &str) -> bool {
    address.starts_with(PLAIN_SCHEME) || address.starts_with(SECURE_SCHEME)
}

/// Normalize a user-supplied address into a WebSocket endpoint URL.
///
/// Addresses without a `ws://` or `wss://` prefix get `ws://` prepended.
/// Nothing else is validated; a malformed URL surfaces as a dial failure.
///
/// # Arguments
///
/// * `address` - The raw address from the command line
///
/// # Returns
///
/// The endpoint URL to dial
pub fn resolve_endpoint(address: &str) -> String {
    if has_websocket_scheme(address) {
        address.to_string()
    } else {
        format!("{PLAIN_SCHEME}{address}")
    }
}

/// Build the frame to send for a line typed at the prompt.
///
/// # Returns
///
/// `None` for an empty line (nothing is sent), otherwise a text frame
/// carrying the line verbatim
pub fn outbound_message(line: String) -> Option<Message> {
    if line.is_empty() {
        None
    } else {
        Some(Message::Text(line.into()))
    }
}
