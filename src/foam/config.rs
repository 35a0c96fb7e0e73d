//! Configuration loader for the foamq tool.
//!
//! `defaults/foamq.default.toml` is embedded so the documented defaults and the
//! runtime behaviour stay in sync. User files are layered on top through
//! [`Loader`] before deserializing into [`FoamqConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use super::processor::OutputFormat;

const DEFAULT_TOML: &str = include_str!("../../defaults/foamq.default.toml");

/// Top-level configuration consumed by foamq.
#[derive(Debug, Clone, Deserialize)]
pub struct FoamqConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Number printed for the first line of a file
    pub line_base: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
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

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<FoamqConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<FoamqConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.format, OutputFormat::Simple);
        assert_eq!(config.output.line_base, 1);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "json")
            .expect("override to apply")
            .set_override("output.line_base", 0)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.line_base, 0);
    }

    #[test]
    fn layers_user_file() {
        let path = std::env::temp_dir().join(format!("foamq-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("temp file");
        writeln!(file, "[logging]\nlevel = \"debug\"").expect("write config");

        let config = Loader::new().with_file(&path).build().expect("config to build");
        std::fs::remove_file(&path).ok();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.output.format, OutputFormat::Simple);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/foamq.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.line_base, 1);
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new()
            .with_file("/definitely/not/here/foamq.toml")
            .build()
            .is_err());
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Loader::new()
            .set_override("output.format", "xml")
            .expect("override to apply")
            .build()
            .is_err());
    }
}
