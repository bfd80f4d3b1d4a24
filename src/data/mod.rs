//! Reference data layer: symptom index, detail tables and their CSV loaders.

pub mod index;
pub mod loader;
pub mod tables;

use serde::Serialize;

pub use index::SymptomIndex;
pub use loader::{load_reference, LoadError};
pub use tables::{DetailTables, DietRow, Medication, DEFAULT_DOSAGE};

/// Row count and headers of one loaded table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub rows: usize,
    pub columns: Vec<String>,
}

/// Shape of every reference table, reported by `GET /api/datasets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub symptoms: TableSummary,
    pub medications: TableSummary,
    pub precautions: TableSummary,
    pub descriptions: TableSummary,
    pub diet: TableSummary,
}

/// Immutable reference data loaded once at start-up and injected into the pipeline.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub index: SymptomIndex,
    pub details: DetailTables,
    pub summary: DatasetSummary,
}

impl ReferenceData {
    pub fn new(index: SymptomIndex, details: DetailTables) -> Self {
        Self {
            index,
            details,
            summary: DatasetSummary::default(),
        }
    }

    pub fn with_summary(mut self, summary: DatasetSummary) -> Self {
        self.summary = summary;
        self
    }
}
