use crate::domain::TableConfig;
use crate::ports::ConfigProvider;

// ============================================================================
// StaticConfigProvider - Config set in code
// ============================================================================

/// Static configuration provider with values set in code.
///
/// Useful for tests and embedding. To read a file, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: TableConfig,
}

impl StaticConfigProvider {
    /// Create with the default table config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given table config.
    #[must_use]
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn table_config(&self) -> TableConfig {
        self.config
    }
}

// ============================================================================
// TomlConfigProvider - Config file loading (requires "toml-config" feature)
// ============================================================================

#[cfg(feature = "toml-config")]
mod toml_config {
    use super::*;
    use crate::domain::{DEFAULT_BUCKET_SIZE, DEFAULT_DIGEST_LEN};
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;
    use thiserror::Error;
    use tracing::debug;

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        table: TableConfigFile,
    }

    #[derive(Debug, Deserialize, Default)]
    struct TableConfigFile {
        digest_len: Option<usize>,
        bucket_size: Option<usize>,
    }

    /// TOML-based configuration provider.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [table]
    /// digest_len = 32
    /// bucket_size = 16
    /// ```
    ///
    /// Missing keys (or a missing `[table]` section) fall back to the defaults.
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        config: TableConfig,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file cannot be read, parsed or validated.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let path = path.as_ref();
            let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
                path: path.display().to_string(),
                error: e.to_string(),
            })?;

            debug!("[skad] Loading table config from {}", path.display());
            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let tc = file.table;
            let config = TableConfig {
                digest_len: tc.digest_len.unwrap_or(DEFAULT_DIGEST_LEN),
                bucket_size: tc.bucket_size.unwrap_or(DEFAULT_BUCKET_SIZE),
            };
            config
                .validate()
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;

            Ok(Self { config })
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn table_config(&self) -> TableConfig {
            self.config
        }
    }

    /// Errors that can occur during config loading.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum ConfigError {
        /// File I/O error.
        #[error("Failed to read {path}: {error}")]
        Io {
            /// Path of the file that failed to load.
            path: String,
            /// Error message from the I/O operation.
            error: String,
        },
        /// TOML parsing error.
        #[error("Failed to parse config: {0}")]
        Parse(String),
        /// Parsed values do not describe a usable table.
        #[error("Invalid config: {0}")]
        Invalid(String),
    }
}

#[cfg(feature = "toml-config")]
pub use toml_config::{ConfigError, TomlConfigProvider};
