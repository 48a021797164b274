//! Discovered asset files

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::paths;
use crate::models::config::Settings;

/// A discovered asset together with its derived download location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Path as returned by discovery
    pub path: PathBuf,

    /// Path relative to the anchor directory, `/`-separated
    pub relative_path: String,

    /// Raw download URL
    pub url: String,

    /// Whether this file is the package entry point
    pub is_main: bool,
}

impl FileEntry {
    /// Classify a discovered path against the settings
    pub fn from_path(path: impl Into<PathBuf>, settings: &Settings) -> Self {
        let path = path.into();
        let relative_path = paths::relative_path(&paths::normalize(&path), &settings.anchor);
        let url = paths::source_url(&settings.repo_url, &settings.branch, &relative_path);
        let is_main = is_main_file(&path, &settings.main_file);

        Self {
            path,
            relative_path,
            url,
            is_main,
        }
    }

    /// Classify every discovered path, keeping order
    pub fn classify_all(paths: Vec<PathBuf>, settings: &Settings) -> Vec<Self> {
        paths
            .into_iter()
            .map(|path| Self::from_path(path, settings))
            .collect()
    }
}

/// Suffix match on the whole path, so `old_zyc_ReaPet.lua` also qualifies
fn is_main_file(path: &Path, main_file: &str) -> bool {
    paths::normalize(path).ends_with(main_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_derives_url() {
        let settings = Settings::default();
        let entry = FileEntry::from_path("Release/REAPER/Scripts/ReaPet/ui/skin.png", &settings);

        assert_eq!(entry.relative_path, "Release/REAPER/Scripts/ReaPet/ui/skin.png");
        assert_eq!(
            entry.url,
            "https://github.com/YichengZ/zyc-scripts/raw/main/Release/REAPER/Scripts/ReaPet/ui/skin.png"
        );
        assert!(!entry.is_main);
    }

    #[test]
    fn test_main_file_matches_path_suffix() {
        let settings = Settings::default();

        assert!(FileEntry::from_path("Release/REAPER/Scripts/ReaPet/zyc_ReaPet.lua", &settings).is_main);
        assert!(FileEntry::from_path("Release/REAPER/Scripts/ReaPet/old_zyc_ReaPet.lua", &settings).is_main);
        assert!(FileEntry::from_path("Release/REAPER/Scripts/ReaPet/legacy/zyc_ReaPet.lua", &settings).is_main);
        assert!(!FileEntry::from_path("Release/REAPER/Scripts/ReaPet/zyc_ReaPet.lua.json", &settings).is_main);
        assert!(!FileEntry::from_path("Release/REAPER/Scripts/ReaPet/zyc_ReaPet.LUA", &settings).is_main);
    }
}
