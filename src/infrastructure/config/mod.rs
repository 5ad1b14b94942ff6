//! Infrastructure configuration modules.

pub mod backend;
pub mod logging;
pub mod settings;

pub use settings::Config;
