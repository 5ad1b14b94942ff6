//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured adapters from
//! application configuration.
//!
//! # Submodules
//!
//! - [`adapter`] - Storage adapter construction per backend kind

pub mod adapter;

#[cfg(test)]
mod tests;

pub use adapter::{build_adapter, is_compiled};
