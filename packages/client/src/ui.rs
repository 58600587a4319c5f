//! UI utilities for the client.

use std::sync::{Arc, Mutex};

use rustyline::ExternalPrinter;
use ws_client_shared::time::{Clock, SystemClock, format_clock_prefix};

use crate::formatter::MessageFormatter;

/// Destination for lines shown to the user.
pub trait Printer: Send {
    /// Print one line. Implementations add the trailing newline.
    fn print(&mut self, line: String);
}

/// Printer for the interactive terminal.
pub enum TerminalPrinter {
    /// Prints above the prompt while the line editor is reading
    External(Box<dyn ExternalPrinter + Send>),
    /// Plain stdout, used when the terminal is not interactive
    Stdout,
}

impl Printer for TerminalPrinter {
    fn print(&mut self, line: String) {
        match self {
            TerminalPrinter::External(printer) => {
                // rustyline only appends the newline itself while in raw mode
                if let Err(e) = printer.print(with_line_break(line)) {
                    tracing::debug!("external printer failed: {}", e);
                }
            }
            TerminalPrinter::Stdout => println!("{line}"),
        }
    }
}

fn with_line_break(mut line: String) -> String {
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

/// Shared handle to the printer, cloned into every loop that writes output.
#[derive(Clone)]
pub struct Console {
    printer: Arc<Mutex<Box<dyn Printer>>>,
}

impl Console {
    pub fn new(printer: impl Printer + 'static) -> Self {
        Self {
            printer: Arc::new(Mutex::new(Box::new(printer))),
        }
    }

    pub fn print(&self, line: String) {
        let mut printer = match self.printer.lock() {
            Ok(printer) => printer,
            Err(poisoned) => poisoned.into_inner(),
        };
        printer.print(line);
    }
}

/// Applies the optional `[HH:MM]` timestamp to prompts and incoming lines.
#[derive(Clone)]
pub struct Decorator {
    clock: Arc<dyn Clock>,
    timestamps: bool,
}

impl Decorator {
    pub fn new(clock: Arc<dyn Clock>, timestamps: bool) -> Self {
        Self { clock, timestamps }
    }

    /// Decorator without timestamps
    pub fn plain() -> Self {
        Self::new(Arc::new(SystemClock), false)
    }

    pub fn timestamps(&self) -> bool {
        self.timestamps
    }

    fn prefix(&self) -> String {
        if self.timestamps {
            format_clock_prefix(self.clock.now_local())
        } else {
            String::new()
        }
    }

    pub fn prompt(&self) -> String {
        MessageFormatter::format_prompt(&self.prefix())
    }

    pub fn incoming(&self, text: &str) -> String {
        MessageFormatter::format_incoming(&self.prefix(), text)
    }

    pub fn binary(&self, byte_count: usize) -> String {
        MessageFormatter::format_binary_message(&self.prefix(), byte_count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ws_client_shared::time::FixedClock;

    use super::*;

    struct RecordingPrinter(Arc<Mutex<Vec<String>>>);

    impl Printer for RecordingPrinter {
        fn print(&mut self, line: String) {
            self.0.lock().expect("lock").push(line);
        }
    }

    fn fixed_decorator(timestamps: bool) -> Decorator {
        let time = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|date| date.and_hms_opt(14, 7, 0))
            .expect("valid test time");
        Decorator::new(Arc::new(FixedClock::new(time)), timestamps)
    }

    #[test]
    fn test_decorator_prefixes_prompt_with_timestamp() {
        // テスト項目: タイムスタンプ有効時、プロンプトに [HH:MM] が付与される
        // given (前提条件):
        let decorator = fixed_decorator(true);

        // when (操作):
        let prompt = decorator.prompt();

        // then (期待する結果):
        assert_eq!(prompt, "[14:07] \x1b[32m»\x1b[0m ");
    }

    #[test]
    fn test_decorator_prefixes_incoming_with_timestamp() {
        // テスト項目: タイムスタンプ有効時、受信メッセージに [HH:MM] が付与される
        // given (前提条件):
        let decorator = fixed_decorator(true);

        // when (操作):
        let line = decorator.incoming("pong");

        // then (期待する結果):
        assert_eq!(line, "[14:07] \x1b[31m«\x1b[0m pong");
    }

    #[test]
    fn test_decorator_without_timestamps_adds_no_prefix() {
        // テスト項目: タイムスタンプ無効時はプレフィックスが付与されない
        // given (前提条件):
        let decorator = fixed_decorator(false);

        // when (操作):
        let prompt = decorator.prompt();
        let line = decorator.incoming("pong");

        // then (期待する結果):
        assert_eq!(prompt, "\x1b[32m»\x1b[0m ");
        assert_eq!(line, "\x1b[31m«\x1b[0m pong");
        assert!(!Decorator::plain().timestamps());
    }

    #[test]
    fn test_with_line_break_terminates_line() {
        // テスト項目: 改行のない行には改行が 1 つ付与され、改行済みの行は変更されない
        // given (前提条件):
        let bare = "<<client: sent websocket close frame>>".to_string();
        let terminated = "hello\n".to_string();

        // when (操作):
        let bare = with_line_break(bare);
        let terminated = with_line_break(terminated);

        // then (期待する結果):
        assert_eq!(bare, "<<client: sent websocket close frame>>\n");
        assert_eq!(terminated, "hello\n");
    }

    #[test]
    fn test_console_clones_share_printer() {
        // テスト項目: Console のクローンは同じプリンタに出力する
        // given (前提条件):
        let lines = Arc::new(Mutex::new(Vec::new()));
        let console = Console::new(RecordingPrinter(lines.clone()));
        let clone = console.clone();

        // when (操作):
        console.print("first".to_string());
        clone.print("second".to_string());

        // then (期待する結果):
        assert_eq!(*lines.lock().expect("lock"), vec!["first", "second"]);
    }
}
