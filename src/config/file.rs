//! Configuration file source

use std::path::PathBuf;

use crate::error::{IndexError, Result};
use crate::models::config::PartialSettings;
use super::{parser, ConfigSource};

/// File name written by `--init`
pub const DEFAULT_CONFIG_FILE: &str = ".reaindex.toml";

/// A TOML configuration file named with `--config`; it must exist
#[derive(Debug, Clone)]
pub struct FileConfig {
    path: PathBuf,
}

impl FileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.path.is_file() {
            return Err(IndexError::ConfigNotFound {
                path: self.path.clone(),
                #[cfg(not(tarpaulin_include))]
                backtrace: std::backtrace::Backtrace::capture(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "config file"
    }
}
