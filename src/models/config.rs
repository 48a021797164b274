//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Repository that hosts the released assets
pub const DEFAULT_REPO_URL: &str = "https://github.com/YichengZ/zyc-scripts";

/// Branch the raw download URLs point at
pub const DEFAULT_BRANCH: &str = "main";

/// Directory scanned for script assets
pub const DEFAULT_BASE_PATH: &str = "Release/REAPER/Scripts/ReaPet";

/// Directory name download paths are computed from
pub const DEFAULT_ANCHOR: &str = "Release/";

/// File name of the script entry point
pub const DEFAULT_MAIN_FILE: &str = "zyc_ReaPet.lua";

/// Entry point used when discovery does not find the main file
pub const DEFAULT_FALLBACK_MAIN_PATH: &str = "Release/REAPER/Scripts/ReaPet/zyc_ReaPet.lua";

/// Main configuration settings
///
/// Settings are resolved once at startup and then passed by reference into
/// discovery, path derivation and the manifest builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Repository URL, without a trailing slash
    pub repo_url: String,

    /// Branch used in raw download URLs
    pub branch: String,

    /// Directory to scan for assets
    pub base_path: PathBuf,

    /// Anchor directory used to compute relative download paths
    pub anchor: String,

    /// File name marking the package entry point
    pub main_file: String,

    /// Relative path emitted as the entry point when none is discovered
    pub fallback_main_path: String,

    /// File extensions to include, compared case-insensitively
    pub extensions: Vec<String>,

    /// Substrings that exclude a path when present
    pub exclude_markers: Vec<String>,

    /// Additional glob patterns that exclude a path
    pub exclude_patterns: Vec<String>,

    /// Whether to follow symbolic links during directory traversal
    pub follow_links: bool,

    /// Pinned commit hash, skipping the git lookup
    pub commit: Option<String>,

    /// Output format (xml, json)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            anchor: DEFAULT_ANCHOR.to_string(),
            main_file: DEFAULT_MAIN_FILE.to_string(),
            fallback_main_path: DEFAULT_FALLBACK_MAIN_PATH.to_string(),
            extensions: ["lua", "png", "jpg", "jpeg", "json"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            exclude_markers: vec![".DS_Store".to_string(), ".git".to_string()],
            exclude_patterns: Vec::new(),
            follow_links: false,
            commit: None,
            output_format: OutputFormat::Xml,
            output_file: None,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ReaPack index XML
    Xml,
    /// JSON rendering of the same manifest
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(OutputFormat::Xml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Xml => write!(f, "xml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub repo_url: Option<String>,
    pub branch: Option<String>,
    pub base_path: Option<PathBuf>,
    pub anchor: Option<String>,
    pub main_file: Option<String>,
    pub fallback_main_path: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub exclude_markers: Option<Vec<String>>,
    pub exclude_patterns: Option<Vec<String>>,
    pub follow_links: Option<bool>,
    pub commit: Option<String>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
}

impl PartialSettings {
    /// Overwrite fields with every field `other` sets
    pub fn merge_from(&mut self, other: PartialSettings) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )*
            };
        }

        take!(
            repo_url,
            branch,
            base_path,
            anchor,
            main_file,
            fallback_main_path,
            extensions,
            exclude_markers,
            exclude_patterns,
            follow_links,
            commit,
            output_format,
            output_file,
        );
    }

    /// Resolve into full settings, falling back to defaults
    pub fn to_settings(&self) -> Settings {
        let defaults = Settings::default();
        let repo_url = self.repo_url.clone().unwrap_or(defaults.repo_url);

        Settings {
            repo_url: repo_url.trim_end_matches('/').to_string(),
            branch: self.branch.clone().unwrap_or(defaults.branch),
            base_path: self.base_path.clone().unwrap_or(defaults.base_path),
            anchor: self.anchor.clone().unwrap_or(defaults.anchor),
            main_file: self.main_file.clone().unwrap_or(defaults.main_file),
            fallback_main_path: self
                .fallback_main_path
                .clone()
                .unwrap_or(defaults.fallback_main_path),
            extensions: self.extensions.clone().unwrap_or(defaults.extensions),
            exclude_markers: self.exclude_markers.clone().unwrap_or(defaults.exclude_markers),
            exclude_patterns: self.exclude_patterns.clone().unwrap_or(defaults.exclude_patterns),
            follow_links: self.follow_links.unwrap_or(defaults.follow_links),
            commit: self.commit.clone().or(defaults.commit),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            output_file: self.output_file.clone().or(defaults.output_file),
        }
    }
}
