//! Configuration module for Shipyard
//!
//! Hierarchy (highest priority first):
//! 1. CLI flags and interactive answers
//! 2. Environment variables (SHIPYARD_*)
//! 3. `--config <path>` or `./shipyard.toml`
//! 4. User config (~/.config/shipyard/config.toml)
//! 5. Built-in defaults

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    resolve_layers, with_env_overrides, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{Config, DefaultsConfig, LoggingConfig, MonitoringConfig, ToolsConfig};
