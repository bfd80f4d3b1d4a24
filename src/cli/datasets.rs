//! CLI entry-point for inspecting the loaded reference tables.

use anyhow::Result;
use tracing::instrument;

use crate::config::Settings;

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let reference = super::load_reference(&settings)?;
    println!("{}", serde_json::to_string_pretty(&reference.summary)?);
    Ok(())
}
