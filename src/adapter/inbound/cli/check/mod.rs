//! Diagnostic command handlers.

pub mod connection;
pub mod requirements;
