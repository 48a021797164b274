//! Manifest assembly
//!
//! Combines the static catalog with the discovered files into a
//! [`Manifest`]. Building is pure: the commit and generation time are
//! supplied by the caller.

use chrono::{DateTime, Utc};

use crate::core::paths;
use crate::models::config::Settings;
use crate::models::entry::FileEntry;
use crate::models::manifest::{
    Category, IndexMetadata, Manifest, Package, Source, Version, SCHEMA_VERSION,
};
use crate::models::package::{Catalog, PackageMetadata};

/// Timestamp layout used in version elements
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Builder for the package index
pub struct ManifestBuilder<'a> {
    settings: &'a Settings,
    catalog: &'a Catalog,
    commit: String,
    generated_at: DateTime<Utc>,
}

impl<'a> ManifestBuilder<'a> {
    pub fn new(settings: &'a Settings, catalog: &'a Catalog) -> Self {
        Self {
            settings,
            catalog,
            commit: String::new(),
            generated_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Set the abbreviated commit recorded in the header
    pub fn commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = commit.into();
        self
    }

    /// Set the time stamped on packages without a fixed release time
    pub fn generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Build the manifest from the classified discovery results
    pub fn build(&self, entries: &[FileEntry]) -> Manifest {
        let mut categories: Vec<Category> = self
            .catalog
            .static_categories
            .iter()
            .map(|category| Category {
                name: category.name.clone(),
                packages: category
                    .packages
                    .iter()
                    .map(|package| {
                        let url = self.url_for(&package.main_source);
                        self.package(&package.metadata, vec![Source::main(url)])
                    })
                    .collect(),
            })
            .collect();

        categories.push(Category {
            name: self.catalog.script_category.clone(),
            packages: vec![self.package(&self.catalog.script, self.script_sources(entries))],
        });

        Manifest {
            name: self.catalog.index_name.clone(),
            schema_version: SCHEMA_VERSION,
            commit: self.commit.clone(),
            categories,
            metadata: IndexMetadata {
                description: self.catalog.description.clone(),
                website: self.settings.repo_url.clone(),
            },
        }
    }

    /// Order the discovered files into package sources.
    ///
    /// The first main entry leads. Other main candidates are dropped and
    /// every remaining entry follows in discovery order. Without a main
    /// entry, the fallback path is appended last.
    fn script_sources(&self, entries: &[FileEntry]) -> Vec<Source> {
        let main_index = entries.iter().position(|entry| entry.is_main);
        let mut sources = Vec::with_capacity(entries.len() + 1);

        if let Some(index) = main_index {
            sources.push(Source::main(entries[index].url.clone()));
        }

        for (index, entry) in entries.iter().enumerate() {
            if entry.is_main {
                if Some(index) != main_index {
                    tracing::warn!(
                        path = %entry.path.display(),
                        "duplicate main file, leaving it out of the index"
                    );
                }
                continue;
            }
            sources.push(Source::auxiliary(entry.url.clone()));
        }

        if main_index.is_none() {
            tracing::warn!(
                main_file = %self.settings.main_file,
                fallback = %self.settings.fallback_main_path,
                "main file not discovered, using fallback path"
            );
            sources.push(Source::main(self.url_for(&self.settings.fallback_main_path)));
        }

        sources
    }

    fn package(&self, metadata: &PackageMetadata, sources: Vec<Source>) -> Package {
        let time = metadata
            .time
            .clone()
            .unwrap_or_else(|| self.generated_at.format(TIME_FORMAT).to_string());

        Package {
            name: metadata.name.clone(),
            package_type: metadata.package_type,
            description: metadata.description.clone(),
            version: Version {
                name: metadata.version.clone(),
                author: metadata.author.clone(),
                time,
                changelog: metadata.changelog.clone(),
                sources,
            },
        }
    }

    fn url_for(&self, relative_path: &str) -> String {
        paths::source_url(&self.settings.repo_url, &self.settings.branch, relative_path)
    }
}
