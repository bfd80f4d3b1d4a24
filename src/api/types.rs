//! Shared DTOs for JSON requests and responses.

use serde::{Deserialize, Serialize};

use crate::data::DatasetSummary;

/// Body of `POST /predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub symptoms: String,
}

/// Transport-level failure that never reached the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDto {
    pub success: bool,
    pub error: String,
    pub status: u16,
    pub disclaimer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetsDto {
    #[serde(flatten)]
    pub summary: DatasetSummary,
    pub disclaimer: &'static str,
}
