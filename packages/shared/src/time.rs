//! Time-related utilities with clock abstraction for testability.

use chrono::{Local, NaiveDateTime};

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get the current wall-clock time in the local timezone
    fn now_local(&self) -> NaiveDateTime;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: NaiveDateTime,
}

impl FixedClock {
    /// Create a new fixed clock with the given local time
    pub fn new(fixed_time: NaiveDateTime) -> Self {
        Self { fixed_time }
    }
}

impl Clock for FixedClock {
    fn now_local(&self) -> NaiveDateTime {
        self.fixed_time
    }
}

/// Format a time as the `[HH:MM] ` prefix used in front of prompts and messages.
pub fn format_clock_prefix(time: NaiveDateTime) -> String {
    time.format("[%H:%M] ").to_string()
}
