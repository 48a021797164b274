//! Asset discovery
//!
//! Walks the configured base directory and returns every asset file that
//! should be published, sorted by path. Hidden entries are skipped along
//! with everything below a hidden directory. A missing base directory is not
//! an error and yields no files.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::paths;
use crate::error::{IndexError, Result};
use crate::models::config::Settings;

/// Recursive file discoverer for the asset tree
pub struct Discoverer<'a> {
    settings: &'a Settings,
    exclude_patterns: Vec<Pattern>,
    suffixes: Vec<String>,
}

impl<'a> Discoverer<'a> {
    /// Create a discoverer, compiling the configured exclude patterns
    pub fn new(settings: &'a Settings) -> Result<Self> {
        let exclude_patterns = settings
            .exclude_patterns
            .iter()
            .map(|pattern| Pattern::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let suffixes = settings
            .extensions
            .iter()
            .map(|ext| format!(".{}", ext.trim_start_matches('.').to_lowercase()))
            .collect();

        Ok(Self {
            settings,
            exclude_patterns,
            suffixes,
        })
    }

    /// Discover all matching files under the base directory
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let base = &self.settings.base_path;

        if !base.is_dir() {
            tracing::debug!(path = %base.display(), "base directory not found, nothing to discover");
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(base)
            .follow_links(self.settings.follow_links)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry) && !self.has_exclude_marker(entry.path()));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| self.traversal_error(err))?;
            let path = entry.path();

            if entry.file_type().is_dir() || path.is_dir() {
                continue;
            }

            if !self.has_allowed_extension(path) {
                tracing::trace!(path = %path.display(), "skipping file with unlisted extension");
                continue;
            }

            if self.is_excluded(path) {
                tracing::trace!(path = %path.display(), "skipping file matching exclude pattern");
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort_by_cached_key(|path| paths::normalize(path));
        tracing::debug!(count = files.len(), base = %base.display(), "discovered asset files");

        Ok(files)
    }

    /// Check whether a path contains one of the exclusion markers.
    ///
    /// Only the part below the base directory is inspected, so a checkout
    /// living under e.g. `~/site.github.io` is still scanned.
    pub fn has_exclude_marker(&self, path: &Path) -> bool {
        let path_str = self.relative(path);
        self.settings
            .exclude_markers
            .iter()
            .any(|marker| path_str.contains(marker.as_str()))
    }

    /// Check whether the file name ends with an allowed extension
    pub fn has_allowed_extension(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy().to_lowercase();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Check whether a path matches any exclude pattern.
    ///
    /// Patterns are tried against the path relative to the base directory
    /// and against the bare file name.
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude_patterns.is_empty() {
            return false;
        }

        let relative = self.relative(path);
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.exclude_patterns
            .iter()
            .any(|pattern| pattern.matches(&relative) || pattern.matches(&file_name))
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.settings.base_path)
            .map(paths::normalize)
            .unwrap_or_else(|_| paths::normalize(path))
    }

    fn traversal_error(&self, err: walkdir::Error) -> IndexError {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.settings.base_path.clone());

        if let Some(io_err) = err.io_error() {
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                return IndexError::permission_denied(path);
            }
        }

        IndexError::directory_traversal_error(path, err.to_string())
    }
}

/// Dot-prefixed files and directories below the base are never published
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Discover asset files with the given settings
pub fn discover_files(settings: &Settings) -> Result<Vec<PathBuf>> {
    Discoverer::new(settings)?.discover()
}
