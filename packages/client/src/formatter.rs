//! Message formatting utilities for client display.

use tokio_tungstenite::tungstenite::protocol::CloseFrame;

/// Green glyph marking the input prompt
pub const PROMPT_GLYPH: &str = "\x1b[32m»\x1b[0m";

/// Red glyph marking messages received from the server
pub const INCOMING_GLYPH: &str = "\x1b[31m«\x1b[0m";

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format the input prompt
    ///
    /// # Arguments
    ///
    /// * `prefix` - Timestamp prefix, or an empty string when disabled
    pub fn format_prompt(prefix: &str) -> String {
        format!("{prefix}{PROMPT_GLYPH} ")
    }

    /// Format a text message received from the server
    ///
    /// # Arguments
    ///
    /// * `prefix` - Timestamp prefix, or an empty string when disabled
    /// * `text` - The message payload
    pub fn format_incoming(prefix: &str, text: &str) -> String {
        format!("{prefix}{INCOMING_GLYPH} {text}")
    }

    /// Format a binary message notification
    ///
    /// # Arguments
    ///
    /// * `prefix` - Timestamp prefix, or an empty string when disabled
    /// * `byte_count` - The number of bytes received
    pub fn format_binary_message(prefix: &str, byte_count: usize) -> String {
        format!("{prefix}{INCOMING_GLYPH} <<{byte_count} bytes of binary data>>")
    }

    /// Format a notice about the server side of the connection
    pub fn format_server_notice(detail: &str) -> String {
        format!("<<server: {detail}>>")
    }

    /// Describe a close frame sent by the server
    pub fn describe_close(frame: Option<&CloseFrame>) -> String {
        match frame {
            Some(frame) if frame.reason.is_empty() => {
                format!("close {}", u16::from(frame.code))
            }
            Some(frame) => format!("close {} {}", u16::from(frame.code), frame.reason.as_str()),
            None => "close".to_string(),
        }
    }

    /// Format the confirmation printed once the close frame went out
    pub fn format_close_sent() -> String {
        "<<client: sent websocket close frame>>".to_string()
    }

    /// Format a failed outbound write
    pub fn format_write_error(error: &str) -> String {
        format!("err: {error}")
    }

    /// Format the banner shown with `--verbose` or without an address
    ///
    /// # Arguments
    ///
    /// * `name` - Binary name
    /// * `version` - Package version
    /// * `repository` - Project URL printed on a second line, skipped when empty
    pub fn format_banner(name: &str, version: &str, repository: &str) -> String {
        if repository.is_empty() {
            format!("{name} {version}\n")
        } else {
            format!("{name} {version}\n{repository}\n")
        }
    }

    /// Format the usage text shown when no address was given
    pub fn format_usage(name: &str) -> String {
        format!("Usage:\n  {name} <<ws:// or wss:// URL>>")
    }
}
