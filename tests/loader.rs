use std::{fs, path::Path};

use dx_assistant::{
    data::{load_reference, LoadError},
    triage::{aggregate, AnalysisConfig, Triage},
};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn seeded_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path();
    write(
        path,
        "symptoms.csv",
        "Disease,Symptom_1,Symptom_2,Symptom_3\n\
         Influenza,fever,cough,sore_throat\n\
         Common Cold,Fever, cough\n",
    );
    write(
        path,
        "descriptions.csv",
        "Disease,Description\n\
         Influenza,A contagious respiratory illness.\n\
         Common Cold,A mild viral infection.\n",
    );
    write(
        path,
        "medications.csv",
        "Disease,Medication\n\
         Influenza,\"['Oseltamivir', 'Paracetamol']\"\n\
         influenza,\"['Oseltamivir']\"\n",
    );
    write(
        path,
        "precautions.csv",
        "Disease,Precaution_1,Precaution_2\n\
         Influenza,Rest,Drink fluids\n\
         Common Cold,Keep warm,\n",
    );
    write(
        path,
        "diets.csv",
        "Disease,Diet,Recommended\n\
         Influenza,\"['Soup', 'Herbal tea']\",yes\n\
         Influenza,Alcohol,no\n",
    );
    dir
}

#[test]
fn loads_every_table() {
    let dir = seeded_dir();
    let reference = load_reference(dir.path()).unwrap();

    assert!(reference.index.is_known("sore throat"));
    assert_eq!(reference.index.symptom_count(), 3);
    assert_eq!(reference.index.disease_count(), 2);
    assert_eq!(reference.summary.symptoms.rows, 2);
    assert_eq!(
        reference.summary.symptoms.columns,
        vec!["Disease", "Symptom_1", "Symptom_2", "Symptom_3"]
    );
    assert_eq!(reference.summary.diet.rows, 2);

    let flu = aggregate(&reference.details, "Influenza");
    let meds: Vec<_> = flu.medications.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(meds, vec!["Oseltamivir", "Paracetamol"]);
    assert_eq!(flu.precautions, vec!["Rest", "Drink fluids"]);
    assert_eq!(flu.diet.recommended, vec!["Soup", "Herbal tea"]);
    assert_eq!(flu.diet.avoid, vec!["Alcohol"]);

    let cold = aggregate(&reference.details, "common cold");
    assert_eq!(cold.description, "A mild viral infection.");
    assert!(cold.medications.is_empty());
    assert!(cold.diet.recommended.is_empty());
}

#[test]
fn loaded_data_drives_the_pipeline() {
    let dir = seeded_dir();
    let triage = Triage::new(load_reference(dir.path()).unwrap(), AnalysisConfig::default());
    let analysis = triage.analyze("Fever, cough and a sore throat").unwrap();
    let names: Vec<_> = analysis
        .diseases
        .iter()
        .map(|d| (d.entry.disease.as_str(), d.entry.confidence))
        .collect();
    assert_eq!(names, vec![("Influenza", 1.0), ("Common Cold", 0.67)]);
}

#[test]
fn missing_files_load_as_empty_tables() {
    let dir = tempfile::tempdir().unwrap();
    let reference = load_reference(dir.path()).unwrap();
    assert!(reference.index.is_empty());
    assert_eq!(reference.summary.medications.rows, 0);
    assert!(reference.summary.medications.columns.is_empty());
}

#[test]
fn missing_required_column_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "descriptions.csv", "Disease,Summary\nInfluenza,text\n");
    let err = load_reference(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        LoadError::MissingColumn {
            column: "Description",
            ..
        }
    ));
    assert!(err.to_string().contains("descriptions.csv"));
}

#[test]
fn unreadable_table_names_its_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("symptoms.csv"),
        b"Disease,Symptom_1\nInfluenza,fev\xffer\n",
    )
    .unwrap();
    let err = load_reference(dir.path()).unwrap_err();
    match &err {
        LoadError::Csv { path, .. } => assert!(path.ends_with("symptoms.csv")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("symptoms.csv"));
}
