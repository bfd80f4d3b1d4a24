//! Overlap scoring of matched symptoms against the disease table.
//!
//! The score is a plain count of shared symptoms. Diseases with long symptom
//! lists therefore collect overlap more easily than narrow ones; no rarity or
//! size weighting is applied.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::data::SymptomIndex;

use super::extract::normalize_symptom;

/// Disease name → number of distinct matched symptoms it explains (always ≥ 1).
pub type ScoreMap = IndexMap<String, usize>;

pub fn score(matched: &[String], index: &SymptomIndex) -> ScoreMap {
    let mut scores = ScoreMap::new();
    let mut seen = HashSet::new();
    for symptom in matched {
        if !seen.insert(normalize_symptom(symptom)) {
            continue;
        }
        for disease in index.diseases_for(symptom) {
            *scores.entry(disease.to_string()).or_insert(0) += 1;
        }
    }
    scores
}
