//! Command implementations

use std::path::PathBuf;

use chrono::Utc;

use super::Args;
use crate::config::{self, cli::CliConfig, DEFAULT_CONFIG_FILE};
use crate::core::Generator;
use crate::error::{Result, ResultExt};
use crate::models::package::Catalog;
use crate::output::{create_formatter, create_writer};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Generate the index
    Generate(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Generate(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Init => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                config::create_default_config(&config_path)?;
                println!("Created default configuration file at: {}", config_path.display());
                Ok(())
            }
            Command::Generate(args) => {
                let cli_config = CliConfig::from_args(args);
                let settings = config::load_config(&cli_config)?;
                tracing::debug!(?settings, "resolved settings");

                let catalog = Catalog::zyc_scripts();
                let manifest = Generator::new(&settings, &catalog).generate(Utc::now())?;

                let rendered = create_formatter(settings.output_format)
                    .format(&manifest)
                    .with_context(|| format!("Failed to render {} output", settings.output_format))?;

                create_writer(settings.output_file.as_ref()).write(&rendered)
            }
        }
    }
}
