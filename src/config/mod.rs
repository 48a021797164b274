//! Configuration management
//!
//! Settings are layered: compiled-in defaults, then the TOML file named with
//! `--config`, then command-line flags. No file is read implicitly and the
//! environment is not a configuration source.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use cli::{CliArgs, CliConfig};
pub use file::{FileConfig, DEFAULT_CONFIG_FILE};
pub use parser::{create_default_config, parse_config_content, parse_config_file};
pub use settings::SettingsValidator;

/// Trait for configuration sources.
///
/// Sources are merged in the order they are loaded; later ones win.
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            tracing::debug!(source = source.name(), "merging configuration source");
            Ok(self.merge(source.load()?))
        } else {
            Ok(self)
        }
    }

    /// Add configuration from a file, which must exist
    pub fn add_config_file(self, path: &std::path::Path) -> Result<Self> {
        self.load_from(&FileConfig::new(path))
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();

        SettingsValidator::validate(&settings)?;

        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from the optional `--config` file and command-line arguments
pub fn load_config(cli_config: &CliConfig) -> Result<Settings> {
    let builder = match cli_config.config_path() {
        Some(path) => ConfigBuilder::new().add_config_file(path)?,
        None => ConfigBuilder::new(),
    };

    builder.load_from(cli_config)?.build()
}
