//! Shell configuration.

pub mod config;

pub use config::{ConfigError, ShellConfig, UpdaterConfig, WindowConfig};
