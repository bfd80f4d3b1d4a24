//! Symptom triage pipeline.
//!
//! ```text
//! raw text → extract → score → rank → { reasoning, details } → response
//! ```
//!
//! Every stage is a pure function over immutable reference data; [`Triage`]
//! only wires them together and applies the acceptance policy.

pub mod details;
pub mod extract;
pub mod rank;
pub mod reasoning;
pub mod response;
pub mod score;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::data::{ReferenceData, SymptomIndex};

pub use details::{aggregate, DetailSource, DietPlan, DiseaseDetail};
pub use extract::{extract, suggest};
pub use rank::{rank, RankedEntry, DEFAULT_LIMIT};
pub use reasoning::generate;
pub use response::{AnalysisResponse, DISCLAIMER};
pub use score::{score, ScoreMap};

/// Fewest recognised symptoms an input needs before diseases are scored.
pub const DEFAULT_MIN_SYMPTOMS: usize = 1;

/// At most this many near-miss hints accompany an insufficient-symptoms reply.
const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub min_symptoms: usize,
    pub limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_symptoms: DEFAULT_MIN_SYMPTOMS,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Reasons an input is rejected before a ranked answer can be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Symptoms field is required and cannot be empty.")]
    InputEmpty,
    #[error("Insufficient symptoms. Please provide at least {required} known medical symptom(s); {found} recognised.")]
    InsufficientSymptoms {
        required: usize,
        found: usize,
        matched: Vec<String>,
    },
    #[error("No diseases could be matched to the provided symptoms.")]
    NoDiseaseMatch { matched: Vec<String> },
}

impl AnalysisError {
    /// Stable machine-readable tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InputEmpty => "input_empty",
            Self::InsufficientSymptoms { .. } => "insufficient_symptoms",
            Self::NoDiseaseMatch { .. } => "no_disease_match",
        }
    }

    pub fn matched(&self) -> &[String] {
        match self {
            Self::InputEmpty => &[],
            Self::InsufficientSymptoms { matched, .. } | Self::NoDiseaseMatch { matched } => {
                matched
            }
        }
    }
}

/// One ranked disease with its explanation and reference detail.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDisease {
    pub entry: RankedEntry,
    /// Matched symptoms linked to this disease.
    pub supporting: Vec<String>,
    pub reasoning: String,
    pub detail: DiseaseDetail,
}

/// Result of an accepted analysis, before response assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub received: String,
    pub matched: Vec<String>,
    pub diseases: Vec<RankedDisease>,
}

/// The analysis pipeline bound to one set of reference data.
pub struct Triage {
    index: SymptomIndex,
    details: Arc<dyn DetailSource>,
    config: AnalysisConfig,
}

impl Triage {
    pub fn new(reference: ReferenceData, config: AnalysisConfig) -> Self {
        let ReferenceData { index, details, .. } = reference;
        Self::with_source(index, Arc::new(details), config)
    }

    /// Build a pipeline over any detail collaborator. A zero `limit` is
    /// raised to one so an accepted analysis always reports a disease.
    pub fn with_source(
        index: SymptomIndex,
        details: Arc<dyn DetailSource>,
        config: AnalysisConfig,
    ) -> Self {
        Self {
            index,
            details,
            config: AnalysisConfig {
                limit: config.limit.max(1),
                ..config
            },
        }
    }

    pub fn config(&self) -> AnalysisConfig {
        self.config
    }

    pub fn index(&self) -> &SymptomIndex {
        &self.index
    }

    /// Run the pipeline and apply the acceptance policy.
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub fn analyze(&self, text: &str) -> Result<Analysis, AnalysisError> {
        let received = text.trim();
        if received.is_empty() {
            return Err(AnalysisError::InputEmpty);
        }

        let matched = extract(received, &self.index);
        debug!(?matched, "extracted symptoms");
        if matched.len() < self.config.min_symptoms {
            return Err(AnalysisError::InsufficientSymptoms {
                required: self.config.min_symptoms,
                found: matched.len(),
                matched,
            });
        }

        let scores = score(&matched, &self.index);
        if scores.is_empty() {
            return Err(AnalysisError::NoDiseaseMatch { matched });
        }

        let diseases: Vec<RankedDisease> = rank(&scores, self.config.limit)
            .into_iter()
            .map(|entry| {
                let supporting = self.index.supporting_symptoms(&entry.disease, &matched);
                let reasoning = generate(&supporting, &entry.disease, entry.score);
                let detail = aggregate(self.details.as_ref(), &entry.disease);
                RankedDisease {
                    entry,
                    supporting,
                    reasoning,
                    detail,
                }
            })
            .collect();

        info!(
            matched = matched.len(),
            candidates = scores.len(),
            ranked = diseases.len(),
            "analysis complete"
        );
        Ok(Analysis {
            received: received.to_string(),
            matched,
            diseases,
        })
    }

    /// Run the pipeline and assemble the outward response, success or failure.
    pub fn respond(&self, text: &str) -> AnalysisResponse {
        match self.analyze(text) {
            Ok(analysis) => AnalysisResponse::assemble(analysis),
            Err(err) => {
                warn!(kind = err.kind(), "analysis rejected");
                let suggestions = match err {
                    AnalysisError::InsufficientSymptoms { .. } => {
                        suggest(text, &self.index, MAX_SUGGESTIONS)
                    }
                    _ => Vec::new(),
                };
                AnalysisResponse::reject(text.trim(), &err, suggestions)
            }
        }
    }
}
