#![allow(dead_code)]

use dx_assistant::{
    triage::{AnalysisConfig, Triage},
    DetailTables, ReferenceData, SymptomIndex,
};

/// Small synthetic reference table shared by the integration tests.
pub fn reference() -> ReferenceData {
    let index = SymptomIndex::from_pairs([
        ("Influenza", "fever"),
        ("Influenza", "cough"),
        ("Influenza", "sore throat"),
        ("Cold", "fever"),
        ("Cold", "cough"),
        ("Gastroenteritis", "vomiting"),
        ("Gastroenteritis", "diarrhoea"),
        ("Gastroenteritis", "abdominal pain"),
        ("Migraine", "headache"),
        ("Migraine", "nausea"),
        ("Food Poisoning", "vomiting"),
        ("Food Poisoning", "nausea"),
        ("Allergy", "itching"),
        ("Allergy", "skin rash"),
        ("Fungal infection", "itching"),
        ("Fungal infection", "skin_rash"),
    ]);

    let mut details = DetailTables::default();
    details.add_description("Influenza", "A contagious respiratory illness caused by influenza viruses.");
    details.add_description("influenza", "Duplicate description that should be ignored.");
    details.add_medication("Influenza", "Oseltamivir", Some("75 mg twice daily"));
    details.add_medication("INFLUENZA", "oseltamivir", None);
    details.add_medication("Influenza", "Paracetamol", None);
    details.add_precaution("Influenza", "Rest");
    details.add_precaution("Influenza", "Drink fluids");
    details.add_precaution("Influenza", "rest");
    details.add_diet("Influenza", "Chicken soup", true);
    details.add_diet("Influenza", "Herbal tea", true);
    details.add_diet("Influenza", "Alcohol", false);
    details.add_diet("influenza", "chicken soup", true);

    details.add_description("Cold", "A mild viral infection of the nose and throat.");
    details.add_precaution("Cold", "Drink fluids");
    details.add_precaution("Cold", "Keep warm");
    details.add_diet("Cold", "Herbal tea", true);
    details.add_diet("Cold", "Ginger", true);

    details.add_medication("Allergy", "Antihistamines", None);

    ReferenceData::new(index, details)
}

pub fn triage() -> Triage {
    Triage::new(reference(), AnalysisConfig::default())
}

pub fn triage_with(config: AnalysisConfig) -> Triage {
    Triage::new(reference(), config)
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
