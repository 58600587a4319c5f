//! Client configuration.

use std::time::Duration;

use crate::domain::resolve_endpoint;

/// How often the timestamp in the prompt is refreshed
pub const PROMPT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Settings for one client session, built from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Fully qualified `ws://` or `wss://` endpoint
    pub endpoint: String,
    /// Print connection progress
    pub verbose: bool,
    /// Prefix the prompt and incoming messages with `[HH:MM]`
    pub timestamp_prefix: bool,
    /// Interval between prompt timestamp refreshes
    pub prompt_refresh: Duration,
}

impl ClientConfig {
    /// Create a configuration for the given address with default settings.
    pub fn new(address: &str) -> Self {
        Self {
            endpoint: resolve_endpoint(address),
            verbose: false,
            timestamp_prefix: true,
            prompt_refresh: PROMPT_REFRESH_INTERVAL,
        }
    }

    /// Print connection progress before dialing.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable or disable the `[HH:MM]` prefix.
    pub fn with_timestamp_prefix(mut self, timestamp_prefix: bool) -> Self {
        self.timestamp_prefix = timestamp_prefix;
        self
    }
}

/// Long flags that are also accepted with a single dash, e.g. `-version`.
const SINGLE_DASH_LONG_FLAGS: [&str; 3] = ["version", "verbose", "ts-prefix"];

/// Rewrite single-dash long flags into their double-dash form.
///
/// `-version`, `-ts-prefix` and `-ts-prefix=false` become `--version`,
/// `--ts-prefix` and `--ts-prefix=false`. Short flags such as `-v` and
/// everything after `--` are left alone.
pub fn normalize_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(|arg| {
            if after_separator || arg == "--" {
                after_separator = true;
                return arg;
            }
            let single_dash = arg.strip_prefix('-').filter(|rest| !rest.starts_with('-'));
            let Some(flag) = single_dash else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if SINGLE_DASH_LONG_FLAGS.contains(&name) {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resolves_endpoint_and_uses_defaults() {
        // テスト項目: 既定値ではタイムスタンプが有効で、詳細出力は無効になる
        // given (前提条件):
        let address = "localhost:8080";

        // when (操作):
        let config = ClientConfig::new(address);

        // then (期待する結果):
        assert_eq!(config.endpoint, "ws://localhost:8080");
        assert!(!config.verbose);
        assert!(config.timestamp_prefix);
        assert_eq!(config.prompt_refresh, Duration::from_secs(30));
    }

    #[test]
    fn test_builders_override_defaults() {
        // テスト項目: ビルダーメソッドで各設定を上書きできる
        // given (前提条件):
        let config = ClientConfig::new("wss://example.com/socket");

        // when (操作):
        let config = config.with_verbose(true).with_timestamp_prefix(false);

        // then (期待する結果):
        assert_eq!(config.endpoint, "wss://example.com/socket");
        assert!(config.verbose);
        assert!(!config.timestamp_prefix);
    }

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_normalize_flags_accepts_single_dash_long_flags() {
        // テスト項目: -version や -ts-prefix=false が二重ダッシュ形式に変換される
        // given (前提条件):
        let raw = args(&["ws-client", "-version", "-ts-prefix=false", "-ts-prefix"]);

        // when (操作):
        let result = normalize_flags(raw);

        // then (期待する結果):
        assert_eq!(
            result,
            args(&["ws-client", "--version", "--ts-prefix=false", "--ts-prefix"])
        );
    }

    #[test]
    fn test_normalize_flags_keeps_short_and_double_dash_flags() {
        // テスト項目: 短いフラグ、二重ダッシュのフラグ、アドレスは変更されない
        // given (前提条件):
        let raw = args(&["ws-client", "-v", "--ts-prefix=true", "localhost:8080"]);

        // when (操作):
        let result = normalize_flags(raw.clone());

        // then (期待する結果):
        assert_eq!(result, raw);
    }

    #[test]
    fn test_normalize_flags_stops_at_separator() {
        // テスト項目: -- 以降の引数は変換されない
        // given (前提条件):
        let raw = args(&["ws-client", "--", "-version"]);

        // when (操作):
        let result = normalize_flags(raw.clone());

        // then (期待する結果):
        assert_eq!(result, raw);
    }

    #[test]
    fn test_normalize_flags_ignores_unknown_single_dash_words() {
        // テスト項目: 未知の単一ダッシュ引数は clap にそのまま渡される
        // given (前提条件):
        let raw = args(&["ws-client", "-vx"]);

        // when (操作):
        let result = normalize_flags(raw.clone());

        // then (期待する結果):
        assert_eq!(result, raw);
    }
}
