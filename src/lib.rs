//! reaindex - ReaPack index generator
//!
//! Scans the released REAPER script assets and produces the `index.xml`
//! that ReaPack clients read to install the zyc-scripts effects and scripts.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use error::{ErrorSeverity, IndexError, Result, ResultExt};
pub use models::{
    config::Settings,
    entry::FileEntry,
    manifest::Manifest,
    package::{Catalog, PackageMetadata},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
