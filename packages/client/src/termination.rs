//! Single-fire termination signal shared by the session loops.

use std::sync::Arc;

use tokio::sync::watch;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// Ctrl+C at the prompt or SIGINT
    Interrupted,
    /// The server sent a close frame or the stream ended
    RemoteClosed,
    /// Reading from the connection failed
    ReadError,
    /// Writing to the connection failed
    WriteError,
    /// Terminal input reached end of file
    InputClosed,
}

/// Termination signal observed by every loop of a session.
///
/// The first call to [`TerminationSignal::fire`] records the reason and wakes
/// all waiters. Every later call is a no-op.
#[derive(Debug, Clone)]
pub struct TerminationSignal {
    sender: Arc<watch::Sender<Option<ShutdownReason>>>,
}

impl TerminationSignal {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Fire the signal.
    ///
    /// # Returns
    ///
    /// `true` if this call recorded the reason, `false` if the signal had
    /// already fired
    pub fn fire(&self, reason: ShutdownReason) -> bool {
        let fired = self.sender.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(reason);
            true
        });
        if fired {
            tracing::debug!(?reason, "termination signal fired");
        }
        fired
    }

    /// Wait until the signal fires and return the recorded reason.
    pub async fn fired(&self) -> ShutdownReason {
        let mut receiver = self.sender.subscribe();
        let reason = receiver
            .wait_for(Option::is_some)
            .await
            .ok()
            .and_then(|reason| *reason);
        // The sender lives as long as `self`, so the wait only ends once a reason is set.
        reason.unwrap_or(ShutdownReason::InputClosed)
    }
}

impl Default for TerminationSignal {
    fn default() -> Self {
        Self::new()
    }
}
