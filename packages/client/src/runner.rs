//! Client execution logic.

use std::sync::Arc;

use tokio::{sync::watch, task::JoinHandle};
use ws_client_shared::time::SystemClock;

use crate::{
    config::ClientConfig,
    error::ClientError,
    prompt::{spawn_line_reader, spawn_prompt_refresh},
    session::{connect, run_session},
    termination::{ShutdownReason, TerminationSignal},
    ui::{Console, Decorator},
};

/// Run one interactive session against the configured endpoint.
///
/// Dial failures are returned as errors. Once connected, the session always
/// ends with a close frame and the reason it stopped.
pub async fn run_client(config: ClientConfig) -> Result<ShutdownReason, ClientError> {
    if config.verbose {
        println!("connecting to {}", config.endpoint);
    }
    tracing::info!("Attempting to connect to {}", config.endpoint);

    let ws_stream = connect(&config.endpoint).await?;
    println!("connected to {}", config.endpoint);

    let decorator = Decorator::new(Arc::new(SystemClock), config.timestamp_prefix);
    let (prompt_tx, prompt_rx) = watch::channel(decorator.prompt());
    let (input_rx, printer) = spawn_line_reader(decorator.clone(), prompt_rx)?;
    let console = Console::new(printer);
    let termination = TerminationSignal::new();

    let refresh_task = config.timestamp_prefix.then(|| {
        spawn_prompt_refresh(
            decorator.clone(),
            prompt_tx,
            config.prompt_refresh,
            termination.clone(),
        )
    });
    let interrupt_task = spawn_interrupt_listener(termination.clone());

    let reason = run_session(ws_stream, input_rx, console, decorator, termination).await;

    interrupt_task.abort();
    if let Some(refresh_task) = refresh_task {
        refresh_task.abort();
    }

    tracing::info!("Client session ended: {:?}", reason);
    Ok(reason)
}

/// Turn SIGINT into the termination signal.
///
/// While the line editor holds the terminal in raw mode, Ctrl+C arrives as an
/// input event instead; this covers non-interactive input.
fn spawn_interrupt_listener(termination: TerminationSignal) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                termination.fire(ShutdownReason::Interrupted);
            }
            Err(e) => tracing::warn!("Failed to listen for interrupt signal: {}", e),
        }
    })
}
