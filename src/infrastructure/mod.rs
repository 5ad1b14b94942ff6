//! Infrastructure: configuration loading and adapter wiring.

pub mod config;
pub mod factory;
