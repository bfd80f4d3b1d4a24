//! Detail aggregation over the description, medication, precaution and diet tables.

use std::collections::HashSet;

use serde::Serialize;

use crate::data::{DietRow, Medication};

/// Lookup collaborator for per-disease reference records.
///
/// Lookups are case-insensitive on the disease name and return an empty slice
/// when a table has no record for the disease.
pub trait DetailSource: Send + Sync {
    fn descriptions(&self, disease: &str) -> &[String];
    fn medications(&self, disease: &str) -> &[Medication];
    fn precautions(&self, disease: &str) -> &[String];
    fn diet(&self, disease: &str) -> &[DietRow];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DietPlan {
    pub recommended: Vec<String>,
    pub avoid: Vec<String>,
}

/// Everything known about one disease beyond its symptoms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiseaseDetail {
    /// First description record, empty when none exists.
    pub description: String,
    pub medications: Vec<Medication>,
    pub precautions: Vec<String>,
    pub diet: DietPlan,
}

pub fn aggregate(source: &dyn DetailSource, disease: &str) -> DiseaseDetail {
    let description = source
        .descriptions(disease)
        .first()
        .cloned()
        .unwrap_or_default();

    let medications = dedup_by_key(source.medications(disease).iter().cloned(), |m| {
        m.name.to_lowercase()
    });
    let precautions = dedup_by_key(source.precautions(disease).iter().cloned(), |p| {
        p.to_lowercase()
    });

    let rows = source.diet(disease);
    let diet = DietPlan {
        recommended: dedup_foods(rows.iter().filter(|r| r.recommended)),
        avoid: dedup_foods(rows.iter().filter(|r| !r.recommended)),
    };

    DiseaseDetail {
        description,
        medications,
        precautions,
        diet,
    }
}

fn dedup_foods<'a>(rows: impl Iterator<Item = &'a DietRow>) -> Vec<String> {
    dedup_by_key(rows.map(|r| r.food.clone()), |food| food.to_lowercase())
}

/// Keep the first item for every distinct key, preserving order.
pub(crate) fn dedup_by_key<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + std::hash::Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}
