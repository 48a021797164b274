//! Core functionality: discovery, path derivation and manifest assembly

pub mod commit;
pub mod discovery;
pub mod generator;
pub mod manifest;
pub mod paths;

pub use commit::{CommitHashProvider, FixedCommitHash, GitCommitHash};
pub use discovery::Discoverer;
pub use generator::Generator;
pub use manifest::ManifestBuilder;
