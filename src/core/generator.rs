//! End-to-end index generation
//!
//! Ties the pieces together: commit lookup, discovery, classification and
//! manifest assembly. Rendering and writing are left to the caller.

use chrono::{DateTime, Utc};

use crate::core::commit::{short_hash, CommitHashProvider, FixedCommitHash, GitCommitHash};
use crate::core::discovery::Discoverer;
use crate::core::manifest::ManifestBuilder;
use crate::error::Result;
use crate::models::config::Settings;
use crate::models::entry::FileEntry;
use crate::models::manifest::Manifest;
use crate::models::package::Catalog;

/// Generator for a single index run
pub struct Generator<'a> {
    settings: &'a Settings,
    catalog: &'a Catalog,
    commit_provider: Box<dyn CommitHashProvider + 'a>,
}

impl<'a> Generator<'a> {
    /// Create a generator that reads the commit from the pinned hash or git
    pub fn new(settings: &'a Settings, catalog: &'a Catalog) -> Self {
        let commit_provider: Box<dyn CommitHashProvider> = match &settings.commit {
            Some(hash) => Box::new(FixedCommitHash::new(hash.clone())),
            None => Box::new(GitCommitHash::new(".")),
        };

        Self {
            settings,
            catalog,
            commit_provider,
        }
    }

    /// Replace the commit hash provider
    pub fn with_commit_provider(mut self, provider: impl CommitHashProvider + 'a) -> Self {
        self.commit_provider = Box::new(provider);
        self
    }

    /// Discover and classify the asset files
    pub fn entries(&self) -> Result<Vec<FileEntry>> {
        let files = Discoverer::new(self.settings)?.discover()?;
        Ok(FileEntry::classify_all(files, self.settings))
    }

    /// Produce the manifest stamped with the given generation time
    pub fn generate(&self, generated_at: DateTime<Utc>) -> Result<Manifest> {
        let commit = short_hash(&self.commit_provider.commit_hash()?);
        let entries = self.entries()?;

        tracing::info!(
            commit = %commit,
            files = entries.len(),
            main_found = entries.iter().any(|entry| entry.is_main),
            "generating index"
        );

        Ok(ManifestBuilder::new(self.settings, self.catalog)
            .commit(commit)
            .generated_at(generated_at)
            .build(&entries))
    }
}
