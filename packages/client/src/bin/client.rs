//! Interactive WebSocket client.
//!
//! Connects to a WebSocket endpoint, sends every line typed at the prompt as a
//! text frame and prints incoming text frames with a red "«" marker.
//! Ctrl+C, Ctrl+D or a close from the server sends a close frame and exits.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin ws-client -- localhost:8080/ws
//! cargo run --bin ws-client -- -v -ts-prefix=false wss://example.com/socket
//! ```

use clap::{ArgAction, Parser};

use ws_client::{ClientConfig, config::normalize_flags, formatter::MessageFormatter, run_client};
use ws_client_shared::logger::setup_logger;

/// Exit status for a missing address or a failed dial
const EXIT_FAILURE: i32 = -1;

#[derive(Parser, Debug)]
#[command(name = "ws-client", version)]
#[command(about = "Interactive client for ws:// and wss:// endpoints", long_about = None)]
struct Args {
    /// WebSocket endpoint; "ws://" is assumed when no scheme is given
    address: Option<String>,

    /// Verbose output
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Prefix the prompt and incoming messages with a [HH:MM] timestamp
    #[arg(
        long,
        default_value_t = true,
        default_missing_value = "true",
        num_args = 0..=1,
        require_equals = true,
        action = ArgAction::Set
    )]
    ts_prefix: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse_from(normalize_flags(std::env::args()));

    // Initialize tracing
    setup_logger(
        env!("CARGO_BIN_NAME"),
        if args.verbose { "debug" } else { "warn" },
    );

    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("TLS crypto provider was already installed");
    }

    if args.verbose || args.address.is_none() {
        println!(
            "{}",
            MessageFormatter::format_banner(
                env!("CARGO_BIN_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_REPOSITORY"),
            )
        );
    }

    let Some(address) = args.address else {
        println!("{}", MessageFormatter::format_usage(env!("CARGO_BIN_NAME")));
        std::process::exit(EXIT_FAILURE);
    };

    let config = ClientConfig::new(&address)
        .with_verbose(args.verbose)
        .with_timestamp_prefix(args.ts_prefix);

    match run_client(config).await {
        Ok(reason) => {
            tracing::debug!("Exiting after {:?}", reason);
            // The line reader thread may still be blocked on the terminal.
            std::process::exit(0);
        }
        Err(e) => {
            println!("{}", e);
            tracing::error!("Client error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}
