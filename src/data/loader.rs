//! CSV loaders for the reference tables kept under `DATA_DIR`.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;
use tracing::{info, warn};

use super::{DatasetSummary, DetailTables, ReferenceData, SymptomIndex, TableSummary};

pub const SYMPTOMS_FILE: &str = "symptoms.csv";
pub const DESCRIPTIONS_FILE: &str = "descriptions.csv";
pub const MEDICATIONS_FILE: &str = "medications.csv";
pub const PRECAUTIONS_FILE: &str = "precautions.csv";
pub const DIETS_FILE: &str = "diets.csv";

/// Failures raised while reading reference tables.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{} is missing required column `{column}`", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

struct Table {
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl Table {
    fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    fn require(&self, name: &'static str) -> Result<usize, LoadError> {
        self.column(name).ok_or_else(|| LoadError::MissingColumn {
            path: self.path.clone(),
            column: name,
        })
    }

    fn columns_with_prefix(&self, prefix: &str) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, header)| header.to_ascii_lowercase().starts_with(prefix))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn summary(&self) -> TableSummary {
        TableSummary {
            rows: self.rows.len(),
            columns: self.headers.clone(),
        }
    }
}

fn cell(row: &StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or("")
}

/// Read a headed CSV file. A missing file is not an error: it yields `None`.
fn read_table(path: &Path) -> Result<Option<Table>, LoadError> {
    if !path.exists() {
        warn!(path = %path.display(), "reference table missing; treating as empty");
        return Ok(None);
    }
    let wrap = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(wrap)?;
    let headers = reader
        .headers()
        .map_err(wrap)?
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(wrap)?;
    let table = Table {
        path: path.to_path_buf(),
        headers,
        rows,
    };
    info!(
        path = %path.display(),
        rows = table.rows.len(),
        columns = table.headers.len(),
        "loaded reference table"
    );
    Ok(Some(table))
}

/// Load every reference table from `dir`.
pub fn load_reference(dir: &Path) -> Result<ReferenceData, LoadError> {
    let mut summary = DatasetSummary::default();

    let mut index = SymptomIndex::default();
    if let Some(table) = read_table(&dir.join(SYMPTOMS_FILE))? {
        load_symptoms(&table, &mut index)?;
        summary.symptoms = table.summary();
    }

    let mut details = DetailTables::default();
    if let Some(table) = read_table(&dir.join(DESCRIPTIONS_FILE))? {
        load_descriptions(&table, &mut details)?;
        summary.descriptions = table.summary();
    }
    if let Some(table) = read_table(&dir.join(MEDICATIONS_FILE))? {
        load_medications(&table, &mut details)?;
        summary.medications = table.summary();
    }
    if let Some(table) = read_table(&dir.join(PRECAUTIONS_FILE))? {
        load_precautions(&table, &mut details)?;
        summary.precautions = table.summary();
    }
    if let Some(table) = read_table(&dir.join(DIETS_FILE))? {
        load_diets(&table, &mut details)?;
        summary.diet = table.summary();
    }

    info!(
        symptoms = index.symptom_count(),
        diseases = index.disease_count(),
        "reference data ready"
    );
    Ok(ReferenceData::new(index, details).with_summary(summary))
}

fn load_symptoms(table: &Table, index: &mut SymptomIndex) -> Result<(), LoadError> {
    let disease_col = table.require("Disease")?;
    let symptom_cols = table.columns_with_prefix("symptom");
    if symptom_cols.is_empty() {
        return Err(LoadError::MissingColumn {
            path: table.path.clone(),
            column: "Symptom_1",
        });
    }
    for row in &table.rows {
        let disease = cell(row, disease_col);
        for &col in &symptom_cols {
            index.insert(disease, cell(row, col));
        }
    }
    Ok(())
}

fn load_descriptions(table: &Table, details: &mut DetailTables) -> Result<(), LoadError> {
    let disease_col = table.require("Disease")?;
    let text_col = table.require("Description")?;
    for row in &table.rows {
        details.add_description(cell(row, disease_col), cell(row, text_col));
    }
    Ok(())
}

fn load_medications(table: &Table, details: &mut DetailTables) -> Result<(), LoadError> {
    let disease_col = table.require("Disease")?;
    let name_col = table.require("Medication")?;
    let dosage_col = table.column("Dosage");
    for row in &table.rows {
        let dosage = dosage_col.map(|col| cell(row, col));
        for name in parse_list_cell(cell(row, name_col)) {
            details.add_medication(cell(row, disease_col), &name, dosage);
        }
    }
    Ok(())
}

fn load_precautions(table: &Table, details: &mut DetailTables) -> Result<(), LoadError> {
    let disease_col = table.require("Disease")?;
    let precaution_cols = table.columns_with_prefix("precaution");
    if precaution_cols.is_empty() {
        return Err(LoadError::MissingColumn {
            path: table.path.clone(),
            column: "Precaution",
        });
    }
    for row in &table.rows {
        for &col in &precaution_cols {
            for precaution in parse_list_cell(cell(row, col)) {
                details.add_precaution(cell(row, disease_col), &precaution);
            }
        }
    }
    Ok(())
}

fn load_diets(table: &Table, details: &mut DetailTables) -> Result<(), LoadError> {
    let disease_col = table.require("Disease")?;
    let food_col = match table.column("Diet").or_else(|| table.column("Food")) {
        Some(col) => col,
        None => table.require("Diet")?,
    };
    let flag_col = table.column("Recommended");
    for row in &table.rows {
        let recommended = flag_col.map_or(true, |col| parse_flag(cell(row, col)));
        for food in parse_list_cell(cell(row, food_col)) {
            details.add_diet(cell(row, disease_col), &food, recommended);
        }
    }
    Ok(())
}

/// Split a cell that is either a plain value or a list literal such as `['a', "b"]`.
fn parse_list_cell(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    let Some(inner) = raw.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) else {
        return if raw.is_empty() {
            Vec::new()
        } else {
            vec![raw.to_string()]
        };
    };

    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    for ch in inner.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '\'' || ch == '"' => quote = Some(ch),
            None if ch == ',' => flush_item(&mut items, &mut current),
            None => current.push(ch),
        }
    }
    flush_item(&mut items, &mut current);
    items
}

fn flush_item(items: &mut Vec<String>, current: &mut String) {
    let item = current.trim();
    if !item.is_empty() {
        items.push(item.to_string());
    }
    current.clear();
}

/// Blank or unrecognised flags count as recommended.
fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "false" | "no" | "n" | "0" | "avoid"
    )
}
