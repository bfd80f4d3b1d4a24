//! Symptom matching, disease ranking and templated clinical reasoning for
//! decision support.
//!
//! Reference tables are loaded once into [`data::ReferenceData`] and injected
//! into [`triage::Triage`], which runs the request-scoped pipeline. The
//! [`api`] and [`cli`] modules are thin surfaces over that pipeline.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod triage;

pub use data::{DetailTables, ReferenceData, SymptomIndex};
pub use triage::{AnalysisConfig, AnalysisError, AnalysisResponse, Triage};
