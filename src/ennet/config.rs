//! Configuration loader for the ennet command-line tool.
//!
//! `defaults/ennet.default.toml` is embedded into the binary so the documented
//! defaults and the runtime behavior cannot drift apart. User files are layered
//! on top through [`Loader`] before deserializing into [`EnnetConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/ennet.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EnnetConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// How expansions are written out.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered formatter
    pub format: String,
    pub trailing_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Directive handed to the tracing filter when `RUST_LOG` is unset
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file, skipped when absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `output.format` from `--format`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<EnnetConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
