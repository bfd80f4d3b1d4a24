//! Templated clinical reasoning for ranked diseases.

use super::rank::RankedEntry;

const STRONG: &str = "The strong symptom overlap indicates a high likelihood of this condition.";
const MODERATE: &str =
    "The moderate symptom overlap suggests this condition is worth investigating.";
const WEAK: &str = "While symptoms are present, further evaluation is recommended.";
const CONSULT: &str =
    "Please consult a qualified healthcare professional for proper diagnosis and treatment.";

/// Explain why `disease` was suggested from the `matched` symptoms behind `score`.
pub fn generate(matched: &[String], disease: &str, score: usize) -> String {
    if matched.is_empty() || score == 0 {
        return format!("Unable to generate reasoning for {disease}");
    }
    let qualifier = match score {
        s if s >= 3 => STRONG,
        2 => MODERATE,
        _ => WEAK,
    };
    format!(
        "The prediction is based on the presence of {score} matching symptom(s): {} commonly associated with {disease}. {qualifier}",
        matched.join(", ")
    )
}

/// Response-level reasoning: the lead explanation, the runner-up conditions,
/// and a referral to a professional.
pub fn summarize(lead: &str, ranked: &[RankedEntry]) -> String {
    let mut text = lead.to_string();
    if ranked.len() > 1 {
        let others = ranked[1..]
            .iter()
            .map(|entry| format!("{} ({} symptom(s))", entry.disease, entry.score))
            .collect::<Vec<_>>()
            .join(", ");
        text.push_str(&format!(" Other possible conditions include: {others}."));
    }
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(CONSULT);
    text
}
