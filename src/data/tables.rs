//! In-memory detail tables keyed by case-folded disease name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::triage::details::DetailSource;

/// Dosage shown when the medication table carries none.
pub const DEFAULT_DOSAGE: &str = "As prescribed by healthcare provider";

/// A medication suggested for a disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
}

/// One flat diet row: a food and whether it is recommended or to be avoided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DietRow {
    pub food: String,
    pub recommended: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DetailTables {
    descriptions: HashMap<String, Vec<String>>,
    medications: HashMap<String, Vec<Medication>>,
    precautions: HashMap<String, Vec<String>>,
    diet: HashMap<String, Vec<DietRow>>,
}

fn key(disease: &str) -> String {
    disease.trim().to_lowercase()
}

impl DetailTables {
    pub fn add_description(&mut self, disease: &str, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.descriptions
            .entry(key(disease))
            .or_default()
            .push(text.to_string());
    }

    /// Record a medication; a blank dosage falls back to [`DEFAULT_DOSAGE`].
    pub fn add_medication(&mut self, disease: &str, name: &str, dosage: Option<&str>) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let dosage = dosage
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DOSAGE);
        self.medications
            .entry(key(disease))
            .or_default()
            .push(Medication {
                name: name.to_string(),
                dosage: dosage.to_string(),
            });
    }

    pub fn add_precaution(&mut self, disease: &str, precaution: &str) {
        let precaution = precaution.trim();
        if precaution.is_empty() {
            return;
        }
        self.precautions
            .entry(key(disease))
            .or_default()
            .push(precaution.to_string());
    }

    pub fn add_diet(&mut self, disease: &str, food: &str, recommended: bool) {
        let food = food.trim();
        if food.is_empty() {
            return;
        }
        self.diet.entry(key(disease)).or_default().push(DietRow {
            food: food.to_string(),
            recommended,
        });
    }
}

impl DetailSource for DetailTables {
    fn descriptions(&self, disease: &str) -> &[String] {
        self.descriptions
            .get(&key(disease))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn medications(&self, disease: &str) -> &[Medication] {
        self.medications
            .get(&key(disease))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn precautions(&self, disease: &str) -> &[String] {
        self.precautions
            .get(&key(disease))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn diet(&self, disease: &str) -> &[DietRow] {
        self.diet
            .get(&key(disease))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
