//! Configuration file parsing utilities

use std::fs;
use std::path::Path;

use crate::error::{IndexError, Result};
use crate::models::config::PartialSettings;

/// Embedded template written by `--init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("default_config.toml");

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(IndexError::ConfigNotFound {
            path: path.to_path_buf(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| IndexError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace::capture(),
    })?;

    tracing::debug!(path = %path.display(), "loading configuration file");
    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| IndexError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
        #[cfg(not(tarpaulin_include))]
        backtrace: std::backtrace::Backtrace::capture(),
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();
    let invalid = |message: String| {
        Err(IndexError::config_error(format!("{} in config file: {}", message, path.display())))
    };

    let non_empty = [
        ("repo_url", settings.repo_url.as_deref()),
        ("branch", settings.branch.as_deref()),
        ("anchor", settings.anchor.as_deref()),
        ("main_file", settings.main_file.as_deref()),
        ("fallback_main_path", settings.fallback_main_path.as_deref()),
    ];
    for (key, value) in non_empty {
        if value.is_some_and(|value| value.trim().is_empty()) {
            return invalid(format!("Invalid empty {}", key));
        }
    }

    if settings.base_path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
        return invalid("Invalid empty base_path".to_string());
    }

    if settings.output_file.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
        return invalid("Invalid empty output_file".to_string());
    }

    if let Some(patterns) = &settings.exclude_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return invalid("Empty exclude pattern".to_string());
            }

            if let Err(e) = glob::Pattern::new(pattern) {
                return invalid(format!("Invalid exclude pattern '{}' ({})", pattern, e));
            }
        }
    }

    if let Some(extensions) = &settings.extensions {
        if extensions.iter().any(|ext| ext.trim_start_matches('.').is_empty()) {
            return invalid("Empty extension".to_string());
        }
    }

    Ok(())
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        return Err(IndexError::AlreadyExists {
            path: path.to_path_buf(),
            #[cfg(not(tarpaulin_include))]
            backtrace: std::backtrace::Backtrace::capture(),
        });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;

    Ok(())
}
