//! WebSocket client session management.

use std::sync::Arc;

use futures_util::{
    SinkExt, StreamExt,
    stream::{SplitSink, SplitStream},
};
use tokio::{
    io::{AsyncRead, AsyncWrite},
    net::TcpStream,
    sync::{Mutex, mpsc},
};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::protocol::{CloseFrame, Message, frame::coding::CloseCode},
};

use crate::{
    domain::outbound_message,
    error::ClientError,
    formatter::MessageFormatter,
    prompt::InputEvent,
    termination::{ShutdownReason, TerminationSignal},
    ui::{Console, Decorator},
};

/// Stream returned by [`connect`]
pub type ClientStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

type SharedSink<S> = Arc<Mutex<SplitSink<WebSocketStream<S>, Message>>>;

/// Open a connection to the endpoint and complete the WebSocket handshake.
pub async fn connect(endpoint: &str) -> Result<ClientStream, ClientError> {
    let (ws_stream, response) = connect_async(endpoint)
        .await
        .map_err(|e| ClientError::Connect {
            endpoint: endpoint.to_string(),
            source: Box::new(e),
        })?;

    tracing::debug!(
        "Handshake with {} completed with status {}",
        endpoint,
        response.status()
    );

    Ok(ws_stream)
}

/// Run the session until the termination signal fires, then close the connection.
///
/// A receive loop prints every incoming message and a send loop forwards every
/// non-empty input line as a text frame. Whichever of them hits the end first
/// fires `termination`; anything else may fire it too (e.g. a signal handler).
/// Exactly one normal-closure close frame is sent afterwards.
///
/// # Returns
///
/// The reason recorded by the termination signal
pub async fn run_session<S>(
    ws_stream: WebSocketStream<S>,
    input_rx: mpsc::UnboundedReceiver<InputEvent>,
    console: Console,
    decorator: Decorator,
    termination: TerminationSignal,
) -> ShutdownReason
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let (write, read) = ws_stream.split();
    let write = Arc::new(Mutex::new(write));

    let receive_task = tokio::spawn(receive_loop(
        read,
        console.clone(),
        decorator,
        termination.clone(),
    ));
    let send_task = tokio::spawn(send_loop(
        write.clone(),
        input_rx,
        console.clone(),
        termination.clone(),
    ));

    let reason = termination.fired().await;
    tracing::info!("Session terminating: {:?}", reason);

    receive_task.abort();
    send_task.abort();

    close_connection(&write, &console).await;

    reason
}

async fn receive_loop<S>(
    mut read: SplitStream<WebSocketStream<S>>,
    console: Console,
    decorator: Decorator,
    termination: TerminationSignal,
) where
    S: AsyncRead + AsyncWrite + Unpin,
{
    while let Some(message) = read.next().await {
        match message {
            Ok(Message::Text(text)) => {
                console.print(decorator.incoming(text.as_str()));
            }
            Ok(Message::Binary(data)) => {
                console.print(decorator.binary(data.len()));
            }
            Ok(Message::Close(frame)) => {
                tracing::info!("Server closed the connection");
                let detail = MessageFormatter::describe_close(frame.as_ref());
                console.print(MessageFormatter::format_server_notice(&detail));
                termination.fire(ShutdownReason::RemoteClosed);
                return;
            }
            Err(e) => {
                tracing::warn!("WebSocket read error: {}", e);
                console.print(MessageFormatter::format_server_notice(&e.to_string()));
                termination.fire(ShutdownReason::ReadError);
                return;
            }
            // ping/pong are answered by tungstenite
            _ => {}
        }
    }

    tracing::info!("Connection stream ended");
    termination.fire(ShutdownReason::RemoteClosed);
}

async fn send_loop<S>(
    write: SharedSink<S>,
    mut input_rx: mpsc::UnboundedReceiver<InputEvent>,
    console: Console,
    termination: TerminationSignal,
) where
    S: AsyncRead + AsyncWrite + Unpin,
{
    loop {
        let event = tokio::select! {
            _ = termination.fired() => return,
            event = input_rx.recv() => event,
        };

        match event {
            Some(InputEvent::Line(line)) => {
                let Some(message) = outbound_message(line) else {
                    continue;
                };
                if let Err(e) = write.lock().await.send(message).await {
                    tracing::warn!("Failed to send message: {}", e);
                    console.print(MessageFormatter::format_write_error(&e.to_string()));
                    termination.fire(ShutdownReason::WriteError);
                    return;
                }
            }
            Some(InputEvent::Interrupted) => {
                termination.fire(ShutdownReason::Interrupted);
                return;
            }
            Some(InputEvent::Closed) | None => {
                termination.fire(ShutdownReason::InputClosed);
                return;
            }
        }
    }
}

async fn close_connection<S>(write: &SharedSink<S>, console: &Console)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut write = write.lock().await;

    let close = Message::Close(Some(CloseFrame {
        code: CloseCode::Normal,
        reason: "".into(),
    }));
    if let Err(e) = write.send(close).await {
        tracing::debug!("Failed to send close frame: {}", e);
    }
    console.print(MessageFormatter::format_close_sent());

    if let Err(e) = write.close().await {
        tracing::debug!("Failed to close connection: {}", e);
    }
}
