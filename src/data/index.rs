//! Symptom ↔ disease lookup built once from the reference table.

use indexmap::{IndexMap, IndexSet};

use crate::triage::extract::normalize_symptom;

/// Read-only many-to-many index between normalised symptoms and disease names.
#[derive(Debug, Clone, Default)]
pub struct SymptomIndex {
    by_symptom: IndexMap<String, IndexSet<String>>,
    by_disease: IndexMap<String, IndexSet<String>>,
    max_phrase_words: usize,
}

impl SymptomIndex {
    /// Build an index from `(disease, symptom)` pairs. Duplicate pairs collapse.
    pub fn from_pairs<I, D, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (D, S)>,
        D: AsRef<str>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for (disease, symptom) in pairs {
            index.insert(disease.as_ref(), symptom.as_ref());
        }
        index
    }

    pub(crate) fn insert(&mut self, disease: &str, symptom: &str) {
        let disease = disease.trim();
        let symptom = normalize_symptom(symptom);
        if disease.is_empty() || symptom.is_empty() {
            return;
        }
        let words = symptom.split(' ').count();
        self.max_phrase_words = self.max_phrase_words.max(words);
        self.by_symptom
            .entry(symptom.clone())
            .or_default()
            .insert(disease.to_string());
        self.by_disease
            .entry(disease.to_string())
            .or_default()
            .insert(symptom);
    }

    /// Whether an already-normalised symptom is part of the known set.
    pub fn is_known(&self, symptom: &str) -> bool {
        self.by_symptom.contains_key(symptom)
    }

    /// Known symptoms in load order.
    pub fn known_symptoms(&self) -> impl Iterator<Item = &str> {
        self.by_symptom.keys().map(String::as_str)
    }

    /// Diseases linked to a symptom; empty when the symptom is unknown.
    pub fn diseases_for(&self, symptom: &str) -> impl Iterator<Item = &str> {
        self.by_symptom
            .get(&normalize_symptom(symptom))
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Symptoms recorded for a disease; empty when the disease is unknown.
    pub fn symptoms_for(&self, disease: &str) -> impl Iterator<Item = &str> {
        self.by_disease
            .get(disease.trim())
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// The subset of `matched` linked to `disease`, in match order.
    pub fn supporting_symptoms(&self, disease: &str, matched: &[String]) -> Vec<String> {
        let Some(symptoms) = self.by_disease.get(disease.trim()) else {
            return Vec::new();
        };
        matched
            .iter()
            .filter(|symptom| symptoms.contains(&normalize_symptom(symptom)))
            .cloned()
            .collect()
    }

    /// Word count of the longest known symptom phrase.
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    pub fn symptom_count(&self) -> usize {
        self.by_symptom.len()
    }

    pub fn disease_count(&self) -> usize {
        self.by_disease.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symptom.is_empty()
    }
}
