//! Infrastructure layer - Configuration files and logging setup

pub mod config;
pub mod logging;

pub use config::{Config, TypeConfig};
pub use logging::init_logging;
