//! Runtime configuration utilities for dx-assistant.

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::triage::{AnalysisConfig, DEFAULT_LIMIT, DEFAULT_MIN_SYMPTOMS};

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Folder holding the reference CSV tables.
    pub data_dir: PathBuf,
    /// Minimum recognised symptoms before diseases are scored.
    pub min_symptoms: usize,
    /// Maximum diseases reported per analysis.
    pub max_results: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            min_symptoms: DEFAULT_MIN_SYMPTOMS,
            max_results: DEFAULT_LIMIT,
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let data_dir = lookup("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let min_symptoms = lookup("MIN_SYMPTOMS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.min_symptoms);
        let max_results = lookup("MAX_RESULTS")
            .and_then(|v| v.trim().parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(defaults.max_results);

        Self {
            data_dir,
            min_symptoms,
            max_results,
        }
    }

    /// Pipeline policy derived from these settings.
    pub fn analysis(&self) -> AnalysisConfig {
        AnalysisConfig {
            min_symptoms: self.min_symptoms,
            limit: self.max_results,
        }
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings.data_dir, PathBuf::from("./data"));
        assert_eq!(settings.analysis(), AnalysisConfig::default());
    }

    #[test]
    fn overrides_and_invalid_values() {
        let vars: HashMap<&str, &str> = [
            ("DATA_DIR", "/srv/reference"),
            ("MIN_SYMPTOMS", "2"),
            ("MAX_RESULTS", "0"),
        ]
        .into_iter()
        .collect();
        let settings = Settings::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(settings.join_data("symptoms.csv"), PathBuf::from("/srv/reference/symptoms.csv"));
        assert_eq!(settings.min_symptoms, 2);
        assert_eq!(settings.max_results, DEFAULT_LIMIT);
    }
}
