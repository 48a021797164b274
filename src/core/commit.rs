//! Commit hash lookup
//!
//! The index header records the commit it was generated from. Lookup goes
//! through [`CommitHashProvider`] so callers can pin a hash instead of
//! shelling out to git.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{IndexError, Result};

/// Number of hash characters embedded in the index header
pub const SHORT_HASH_LEN: usize = 7;

/// Source of the current commit hash
pub trait CommitHashProvider {
    /// Return the full commit hash
    fn commit_hash(&self) -> Result<String>;
}

/// Reads the commit with `git rev-parse HEAD`
#[derive(Debug, Clone)]
pub struct GitCommitHash {
    root: PathBuf,
}

impl GitCommitHash {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CommitHashProvider for GitCommitHash {
    fn commit_hash(&self) -> Result<String> {
        let args = ["rev-parse", "HEAD"];
        let command = format!("git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| IndexError::commit_unavailable(&command, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(IndexError::commit_unavailable(
                command,
                if stderr.is_empty() { format!("exited with {}", output.status) } else { stderr },
            ));
        }

        let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if hash.is_empty() {
            return Err(IndexError::commit_unavailable(command, "empty output"));
        }

        tracing::debug!(%hash, "resolved commit hash");
        Ok(hash)
    }
}

/// A pinned commit hash
#[derive(Debug, Clone)]
pub struct FixedCommitHash(String);

impl FixedCommitHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }
}

impl CommitHashProvider for FixedCommitHash {
    fn commit_hash(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Abbreviate a commit hash for the index header
pub fn short_hash(hash: &str) -> String {
    hash.trim().chars().take(SHORT_HASH_LEN).collect()
}
