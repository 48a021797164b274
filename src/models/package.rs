//! Package metadata and the static package catalog

use serde::Serialize;

/// Kind of installable package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    Script,
    Effect,
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageType::Script => write!(f, "script"),
            PackageType::Effect => write!(f, "effect"),
        }
    }
}

/// Static description of one package version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    pub name: String,
    pub package_type: PackageType,
    pub description: String,
    pub version: String,
    pub author: String,
    /// Release timestamp; `None` means the time the index is generated
    pub time: Option<String>,
    pub changelog: Changelog,
}

/// Changelog text and how it is laid out in the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", content = "text", rename_all = "lowercase")]
pub enum Changelog {
    /// Single line kept on the element's own line
    Inline(String),
    /// Multi-line text laid out as its own block
    Block(String),
}

impl Changelog {
    pub fn text(&self) -> &str {
        match self {
            Changelog::Inline(text) | Changelog::Block(text) => text,
        }
    }
}

/// A package whose single source is fixed rather than discovered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPackage {
    pub metadata: PackageMetadata,
    /// Anchor-relative path of the main source
    pub main_source: String,
}

/// A category holding only static packages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticCategory {
    pub name: String,
    pub packages: Vec<StaticPackage>,
}

/// Everything in the index that does not come from discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    /// Repository display name
    pub index_name: String,
    /// Categories emitted ahead of the discovered package
    pub static_categories: Vec<StaticCategory>,
    /// Category holding the discovered package
    pub script_category: String,
    /// Package whose sources come from discovery
    pub script: PackageMetadata,
    /// Repository description for the metadata block
    pub description: String,
}

impl Catalog {
    /// Catalog of the zyc-scripts repository
    pub fn zyc_scripts() -> Self {
        Self {
            index_name: "Zyc Scripts".to_string(),
            static_categories: vec![StaticCategory {
                name: "Effects".to_string(),
                packages: vec![
                    effect(
                        "zyc_EnvFollower.jsfx",
                        "Professional envelope follower with Peak/RMS detection",
                        "Initial release - Professional envelope follower with Peak/RMS detection",
                    ),
                    effect(
                        "zyc_LFO.jsfx",
                        "Advanced LFO modulator with 7 waveform types",
                        "Initial release - Lite version with core LFO features",
                    ),
                ],
            }],
            script_category: "Scripts".to_string(),
            script: PackageMetadata {
                name: "zyc_ReaPet".to_string(),
                package_type: PackageType::Script,
                description: "REAPER companion app with stats tracking, pomodoro timer, treasure box system, and multiple character skins".to_string(),
                version: "1.0.0".to_string(),
                author: "Yicheng Zhu (Ethan)".to_string(),
                time: None,
                changelog: Changelog::Block(
                    [
                        "v1.0.0 (2025-12-24)",
                        "- Initial release",
                        "- Operation statistics (global and project level)",
                        "- Pomodoro timer functionality",
                        "- Treasure box system (plugin recommendations)",
                        "- Coin system and shop",
                        "- 8 character skins (cat, dog, bear, rabbit, koala, lion, onion, chick)",
                        "- Multi-project support with automatic data switching",
                    ]
                    .join("\n"),
                ),
            },
            description: [
                "Professional REAPER scripts by EthanZhu",
                "",
                "Effects:",
                "- zyc_EnvFollower: Professional envelope follower with Peak/RMS detection",
                "- zyc_LFO: Advanced LFO modulator with 7 waveform types",
                "",
                "Scripts:",
                "- zyc_ReaPet: REAPER companion app with stats tracking, pomodoro timer, treasure box system, and multiple character skins",
            ]
            .join("\n"),
        }
    }
}

fn effect(name: &str, description: &str, changelog: &str) -> StaticPackage {
    StaticPackage {
        metadata: PackageMetadata {
            name: name.to_string(),
            package_type: PackageType::Effect,
            description: description.to_string(),
            version: "1.0.0".to_string(),
            author: "EthanZhu".to_string(),
            time: Some("2025-01-21T00:00:00Z".to_string()),
            changelog: Changelog::Inline(changelog.to_string()),
        },
        main_source: format!("Release/REAPER/Effects/{}", name),
    }
}
