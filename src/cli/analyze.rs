//! CLI entry-point for one-off symptom analysis.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, triage::Triage};

/// Args for the `analyze` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Free-text symptoms, e.g. "fever, cough and a sore throat".
    #[arg(long)]
    pub symptoms: String,
    /// Override the minimum number of recognised symptoms.
    #[arg(long)]
    pub min_symptoms: Option<usize>,
    /// Override how many diseases are reported.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let mut config = settings.analysis();
    if let Some(min) = args.min_symptoms {
        config.min_symptoms = min;
    }
    if let Some(limit) = args.limit.filter(|n| *n > 0) {
        config.limit = limit;
    }

    let reference = super::load_reference(&settings)?;
    let triage = Triage::new(reference, config);
    let response = triage.respond(&args.symptoms);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
