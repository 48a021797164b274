//! Index document model
//!
//! The manifest mirrors the ReaPack index layout
//! (`index > category > reapack > version > {changelog, source}` plus a
//! trailing `metadata` block) without committing to a text format.

use serde::Serialize;

use crate::models::package::{Changelog, PackageType};

/// Index schema version understood by ReaPack
pub const SCHEMA_VERSION: u32 = 1;

/// A complete package index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub schema_version: u32,
    /// Abbreviated commit the index was generated from
    pub commit: String,
    pub categories: Vec<Category>,
    pub metadata: IndexMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub packages: Vec<Package>,
}

/// One installable package (a `reapack` element)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: String,
    #[serde(rename = "type")]
    pub package_type: PackageType,
    pub description: String,
    pub version: Version,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Version {
    pub name: String,
    pub author: String,
    pub time: String,
    pub changelog: Changelog,
    pub sources: Vec<Source>,
}

/// A downloadable file of a package version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub url: String,
    pub main: bool,
}

impl Source {
    pub fn main(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            main: true,
        }
    }

    pub fn auxiliary(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            main: false,
        }
    }
}

/// Repository-level description and links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexMetadata {
    pub description: String,
    pub website: String,
}

#[cfg(test)]
impl Manifest {
    /// Find a package by name across all categories
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.categories
            .iter()
            .flat_map(|category| category.packages.iter())
            .find(|package| package.name == name)
    }
}
