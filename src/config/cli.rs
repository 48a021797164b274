//! Command-line argument configuration source

use std::path::PathBuf;

use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};
use super::ConfigSource;

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
}

/// Command-line arguments that map onto settings
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub base_path: Option<PathBuf>,
    pub repo_url: Option<String>,
    pub branch: Option<String>,
    pub commit: Option<String>,
    pub exclude: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub follow_links: bool,
    pub config: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        let cli_args = CliArgs {
            base_path: args.base_path.clone(),
            repo_url: args.repo_url.clone(),
            branch: args.branch.clone(),
            commit: args.commit.clone(),
            exclude: if args.exclude.is_empty() { None } else { Some(args.exclude.clone()) },
            output_format: args.format.map(|format| match format {
                CliOutputFormat::Xml => OutputFormat::Xml,
                CliOutputFormat::Json => OutputFormat::Json,
            }),
            output_file: args.output_file.clone(),
            follow_links: args.follow_links,
            config: args.config.clone(),
        };

        Self::new(cli_args)
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            base_path: self.args.base_path.clone(),
            repo_url: self.args.repo_url.clone(),
            branch: self.args.branch.clone(),
            commit: self.args.commit.clone(),
            exclude_patterns: self.args.exclude.clone(),
            output_format: self.args.output_format,
            output_file: self.args.output_file.clone(),
            ..Default::default()
        };

        // An absent flag leaves the file value alone
        if self.args.follow_links {
            settings.follow_links = Some(true);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "command-line arguments"
    }
}
