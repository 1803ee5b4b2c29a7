//! Adapters Layer - Concrete implementations of the ports

/// Config providers (static and TOML file)
pub mod config;

pub use config::StaticConfigProvider;

#[cfg(feature = "toml-config")]
pub use config::{ConfigError, TomlConfigProvider};
