//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// reaindex - ReaPack index generator for zyc-scripts
#[derive(Parser, Debug, Default)]
#[command(name = "reaindex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate the ReaPack index.xml for the zyc-scripts repository")]
#[command(long_about = "reaindex scans the released script assets, classifies the package entry point, \
and writes a ReaPack index listing every effect and script with its download URLs. \
Run without arguments from the repository root to print the index to stdout.")]
#[command(after_help = "EXAMPLES:

    # Print the index for the current checkout
    reaindex > index.xml

    # Write the index to a file
    reaindex --output-file index.xml

    # Generate outside a git checkout
    reaindex --commit 1a2b3c4d

    # Inspect the manifest as JSON
    reaindex --format json

    # Create a default configuration file, then use it
    reaindex --init
    reaindex --config .reaindex.toml
")]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to a TOML configuration file (none is read unless given)")]
    pub config: Option<PathBuf>,

    /// Directory to scan for assets
    #[arg(short = 'p', long, value_name = "PATH", help = "Directory to scan for script assets (default: Release/REAPER/Scripts/ReaPet)")]
    pub base_path: Option<PathBuf>,

    /// Repository URL used in download links
    #[arg(long, value_name = "URL", help = "Repository URL used to build download links")]
    pub repo_url: Option<String>,

    /// Branch used in download links
    #[arg(short, long, value_name = "NAME", help = "Branch used to build download links (default: main)")]
    pub branch: Option<String>,

    /// Commit hash to embed instead of asking git
    #[arg(long, value_name = "HASH", help = "Commit hash to embed in the index header instead of running git")]
    pub commit: Option<String>,

    /// Output file path (stdout if not specified)
    #[arg(short, long, value_name = "FILE", help = "File to write the index to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Output format (xml, json)
    #[arg(short, long, value_enum, value_name = "FORMAT", help = "Output format: 'xml' for the ReaPack index, 'json' for the same manifest as JSON")]
    pub format: Option<OutputFormat>,

    /// Exclude files matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns for files to leave out of the index (can be specified multiple times)")]
    pub exclude: Vec<String>,

    /// Follow symbolic links during directory traversal
    #[arg(long, help = "Follow symbolic links while scanning the asset directory")]
    pub follow_links: bool,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose", help = "Only log errors")]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, help = "Log discovery and classification details")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored diagnostics")]
    pub no_colors: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.reaindex.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ReaPack index XML
    Xml,
    /// JSON rendering of the manifest
    Json,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
