//! Line prompt: terminal input on a dedicated thread and the prompt refresh timer.

use std::{borrow::Cow, sync::mpsc as std_mpsc, thread, time::Duration};

use rustyline::{
    Completer, Editor, Helper, Hinter, Validator, error::ReadlineError, highlight::Highlighter,
    history::DefaultHistory,
};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};

use crate::{
    error::ClientError,
    termination::TerminationSignal,
    ui::{Decorator, TerminalPrinter},
};

/// One result of reading the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line was entered (without its line terminator)
    Line(String),
    /// Ctrl+C was pressed at the prompt
    Interrupted,
    /// End of input, or the editor failed
    Closed,
}

type LineEditor = Editor<PromptHelper, DefaultHistory>;

/// Line editor helper that redraws the prompt with the current time.
///
/// rustyline asks for the prompt on every refresh (keystrokes, external
/// prints), so the timestamp stays current while a line is being typed.
#[derive(Completer, Helper, Hinter, Validator)]
pub struct PromptHelper {
    decorator: Decorator,
}

impl PromptHelper {
    pub fn new(decorator: Decorator) -> Self {
        Self { decorator }
    }
}

impl Highlighter for PromptHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        if self.decorator.timestamps() {
            Cow::Owned(self.decorator.prompt())
        } else {
            Cow::Borrowed(prompt)
        }
    }
}

/// Start the line editor on its own thread.
///
/// The editor reads the prompt from `prompt` before every line, so updates
/// published there show up at the next read. Between reads the
/// [`PromptHelper`] keeps the timestamp current on every redraw.
///
/// # Returns
///
/// The receiving end of the input events and the printer to use for output
/// while the editor owns the terminal
pub fn spawn_line_reader(
    decorator: Decorator,
    prompt: watch::Receiver<String>,
) -> Result<(mpsc::UnboundedReceiver<InputEvent>, TerminalPrinter), ClientError> {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (ready_tx, ready_rx) = std_mpsc::sync_channel(1);

    // rustyline is synchronous, so it gets a thread instead of a task
    thread::Builder::new()
        .name("line-reader".to_string())
        .spawn(move || {
            let mut editor = match LineEditor::new() {
                Ok(editor) => editor,
                Err(e) => {
                    ready_tx.send(Err(e)).ok();
                    return;
                }
            };
            editor.set_helper(Some(PromptHelper::new(decorator)));

            let printer = match editor.create_external_printer() {
                Ok(printer) => TerminalPrinter::External(Box::new(printer)),
                Err(e) => {
                    tracing::debug!("terminal is not interactive, printing to stdout: {}", e);
                    TerminalPrinter::Stdout
                }
            };

            if ready_tx.send(Ok(printer)).is_err() {
                return;
            }
            read_lines(&mut editor, &prompt, &input_tx);
        })
        .map_err(|e| ClientError::PromptUnavailable(e.to_string()))?;

    let printer = ready_rx
        .recv()
        .map_err(|_| ClientError::PromptUnavailable("line reader thread exited".to_string()))??;

    Ok((input_rx, printer))
}

fn read_lines(
    editor: &mut LineEditor,
    prompt: &watch::Receiver<String>,
    input_tx: &mpsc::UnboundedSender<InputEvent>,
) {
    loop {
        let current_prompt = prompt.borrow().clone();

        let event = match editor.readline(&current_prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    editor.add_history_entry(line.as_str()).ok();
                }
                InputEvent::Line(line)
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                tracing::info!("Interrupted");
                InputEvent::Interrupted
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                tracing::info!("EOF");
                InputEvent::Closed
            }
            Err(err) => {
                tracing::error!("Readline error: {}", err);
                InputEvent::Closed
            }
        };

        let last = !matches!(event, InputEvent::Line(_));
        if input_tx.send(event).is_err() || last {
            // Session gone or input finished
            break;
        }
    }
}

/// Republish the decorated prompt every `every` until the session terminates.
pub fn spawn_prompt_refresh(
    decorator: Decorator,
    prompt: watch::Sender<String>,
    every: Duration,
    termination: TerminationSignal,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // The first tick completes immediately and the prompt is already current.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = termination.fired() => break,
                _ = ticker.tick() => {
                    if prompt.send(decorator.prompt()).is_err() {
                        break;
                    }
                }
            }
        }
    })
}
