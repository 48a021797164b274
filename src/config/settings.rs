//! Settings validation

use crate::error::{IndexError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid.
    ///
    /// The base path is deliberately not checked: a missing asset directory
    /// produces an index with only the fallback entry point.
    pub fn validate(settings: &Settings) -> Result<()> {
        if !(settings.repo_url.starts_with("http://") || settings.repo_url.starts_with("https://")) {
            return Err(IndexError::config_error(format!(
                "Repository URL must start with http:// or https://, got '{}'",
                settings.repo_url
            )));
        }

        if settings.branch.trim().is_empty() || settings.branch.contains(char::is_whitespace) {
            return Err(IndexError::config_error(format!(
                "Invalid branch name '{}'",
                settings.branch
            )));
        }

        if settings.anchor.is_empty() || !settings.anchor.ends_with('/') {
            return Err(IndexError::config_error(format!(
                "Anchor directory must end with '/', got '{}'",
                settings.anchor
            )));
        }

        if settings.main_file.is_empty() || settings.main_file.contains('/') {
            return Err(IndexError::config_error(format!(
                "Main file must be a bare file name, got '{}'",
                settings.main_file
            )));
        }

        if settings.extensions.is_empty() {
            return Err(IndexError::config_error("At least one file extension is required"));
        }

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern)?;
        }

        if let Some(commit) = &settings.commit {
            if commit.trim().is_empty() || !commit.trim().chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(IndexError::config_error(format!(
                    "Commit must be a hexadecimal hash, got '{}'",
                    commit
                )));
            }
        }

        Ok(())
    }
}
