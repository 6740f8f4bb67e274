//! Configuration loader for papier tooling.
//!
//! `defaults/papier.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. Callers layer user-specific files on top of those defaults via
//! [`Loader`] before deserializing into [`PapierConfig`]. The parser itself takes no
//! configuration.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/papier.default.toml");

/// Per-project configuration picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "papier.toml";

/// Top-level configuration consumed by papier applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PapierConfig {
    pub inspect: InspectConfig,
    pub logging: LoggingConfig,
}

/// Controls `papier inspect` output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub format: String,
    pub label_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PapierConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PapierConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.inspect.format, "ast-treeviz");
        assert_eq!(config.inspect.label_width, 30);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("inspect.format", "ast-json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.inspect.format, "ast-json");
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[inspect]\nlabel_width = 12").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.inspect.label_width, 12);
        assert_eq!(config.inspect.format, "ast-treeviz");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/papier.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.logging.filter, "warn");
    }
}
