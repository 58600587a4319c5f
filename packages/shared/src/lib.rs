//! Utilities shared by the ws-client packages.

pub mod logger;
pub mod time;
