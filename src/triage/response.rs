//! Assembly of the outward-facing analysis response.

use serde::Serialize;

use crate::data::Medication;

use super::{
    details::{dedup_by_key, DietPlan, DiseaseDetail},
    rank::RankedEntry,
    reasoning::summarize,
    Analysis, AnalysisError, RankedDisease,
};

/// Attached to every response, success or failure.
pub const DISCLAIMER: &str = "\
MEDICAL DISCLAIMER

This information is for clinical decision support only and is NOT a final medical diagnosis.

The results provided by this tool are based on symptom matching algorithms and should NEVER be used as a substitute for professional medical advice, diagnosis, or treatment.

IMPORTANT:
- Always consult with a qualified healthcare professional for proper diagnosis
- In case of medical emergency, call emergency services immediately
- Self-diagnosis based on this tool may delay critical treatment
- Individual medical conditions require personalized clinical assessment
- This tool does not account for patient-specific factors, medical history, or comorbidities

By using this tool, you acknowledge that you understand these limitations and assume full responsibility for any decisions made based on its output.";

const NO_DESCRIPTION: &str = "No description available";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Success(AnalysisReport),
    Failure(AnalysisFailure),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseReport {
    #[serde(flatten)]
    pub entry: RankedEntry,
    pub reasoning: String,
    #[serde(flatten)]
    pub detail: DiseaseDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub success: bool,
    pub received_symptoms: String,
    pub matched_symptoms: Vec<String>,
    pub diseases: Vec<DiseaseReport>,
    pub reasoning: String,
    pub description: String,
    pub medications: Vec<Medication>,
    pub precautions: Vec<String>,
    pub diet: DietPlan,
    pub disclaimer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisFailure {
    pub success: bool,
    pub error_kind: &'static str,
    pub error: String,
    pub received_symptoms: String,
    pub matched_symptoms: Vec<String>,
    pub diseases: Vec<DiseaseReport>,
    pub reasoning: String,
    pub description: String,
    pub medications: Vec<Medication>,
    pub precautions: Vec<String>,
    pub diet: DietPlan,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    pub disclaimer: &'static str,
}

impl AnalysisResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Compose a successful analysis. Merged lists follow rank order.
    pub fn assemble(analysis: Analysis) -> Self {
        let Analysis {
            received,
            matched,
            diseases,
        } = analysis;

        let entries: Vec<RankedEntry> = diseases.iter().map(|d| d.entry.clone()).collect();
        let lead = diseases
            .first()
            .map(|d| d.reasoning.as_str())
            .unwrap_or_default();
        let reasoning = summarize(lead, &entries);

        let description = diseases
            .first()
            .map(|d| d.detail.description.clone())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());
        let medications = dedup_by_key(
            diseases.iter().flat_map(|d| d.detail.medications.iter().cloned()),
            |m| m.name.to_lowercase(),
        );
        let precautions = dedup_by_key(
            diseases.iter().flat_map(|d| d.detail.precautions.iter().cloned()),
            |p| p.to_lowercase(),
        );
        let diet = DietPlan {
            recommended: dedup_by_key(
                diseases
                    .iter()
                    .flat_map(|d| d.detail.diet.recommended.iter().cloned()),
                |f| f.to_lowercase(),
            ),
            avoid: dedup_by_key(
                diseases.iter().flat_map(|d| d.detail.diet.avoid.iter().cloned()),
                |f| f.to_lowercase(),
            ),
        };

        let diseases = diseases.into_iter().map(DiseaseReport::from).collect();

        Self::Success(AnalysisReport {
            success: true,
            received_symptoms: received,
            matched_symptoms: matched,
            diseases,
            reasoning,
            description,
            medications,
            precautions,
            diet,
            disclaimer: DISCLAIMER,
        })
    }

    /// Compose a rejected analysis carrying no disease data.
    pub fn reject(received: &str, error: &AnalysisError, suggestions: Vec<String>) -> Self {
        let (message, reasoning, description) = match error {
            AnalysisError::InputEmpty => (
                error.to_string(),
                "Analysis requires a description of symptoms to proceed.".to_string(),
                "Unable to analyze - no symptoms provided".to_string(),
            ),
            AnalysisError::InsufficientSymptoms { required, .. } => (
                format!("{error} You entered: {received}"),
                format!("Analysis requires at least {required} known symptom(s) to proceed."),
                "Unable to analyze - insufficient symptom data".to_string(),
            ),
            AnalysisError::NoDiseaseMatch { .. } => (
                error.to_string(),
                "While symptoms were recognized, no disease associations exist in the database."
                    .to_string(),
                "Analysis incomplete - no disease mapping available".to_string(),
            ),
        };

        Self::Failure(AnalysisFailure {
            success: false,
            error_kind: error.kind(),
            error: message,
            received_symptoms: received.to_string(),
            matched_symptoms: error.matched().to_vec(),
            diseases: Vec::new(),
            reasoning,
            description,
            medications: Vec::new(),
            precautions: Vec::new(),
            diet: DietPlan::default(),
            suggestions,
            disclaimer: DISCLAIMER,
        })
    }
}

impl From<RankedDisease> for DiseaseReport {
    fn from(value: RankedDisease) -> Self {
        DiseaseReport {
            entry: value.entry,
            reasoning: value.reasoning,
            detail: value.detail,
        }
    }
}
