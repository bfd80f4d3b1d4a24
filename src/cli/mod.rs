//! Command-line interface wiring for dx-assistant.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::{
    config::Settings,
    data::{self, ReferenceData},
};

pub mod analyze;
pub mod datasets;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Symptom matching and disease ranking assistant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Analyze(args) => analyze::run(args, settings).await,
            Commands::Datasets => datasets::run(settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyse a free-text symptom description and print the JSON report.
    Analyze(analyze::Args),
    /// Summarise the loaded reference tables.
    Datasets,
    /// Serve the JSON API.
    Serve(serve::Args),
}

/// Load the reference tables named by the settings.
pub(crate) fn load_reference(settings: &Settings) -> Result<ReferenceData> {
    let reference = data::load_reference(&settings.data_dir)
        .with_context(|| format!("loading reference data from {}", settings.data_dir.display()))?;
    if reference.index.is_empty() {
        info!(dir = %settings.data_dir.display(), "no symptoms loaded; every analysis will be rejected");
    }
    Ok(reference)
}
