//! Logging setup utilities for ws-client.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Logs from this crate and from the binary are enabled at `default_log_level`.
/// The level can be overridden using the `RUST_LOG` environment variable.
/// Output goes to stderr so it never mixes with the interactive prompt on stdout.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "ws-client")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use ws_client_shared::logger::setup_logger;
///
/// setup_logger("ws-client", "warn");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    format!(
        "{}={},{}={}",
        env!("CARGO_PKG_NAME").replace('-', "_"),
        default_log_level,
        binary_name.replace('-', "_"),
        default_log_level
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_uses_crate_targets() {
        // テスト項目: ハイフンを含む名前がターゲット名に変換される
        // given (前提条件):
        let binary_name = "ws-client";

        // when (操作):
        let filter = default_filter(binary_name, "debug");

        // then (期待する結果):
        assert_eq!(filter, "ws_client_shared=debug,ws_client=debug");
    }
}
