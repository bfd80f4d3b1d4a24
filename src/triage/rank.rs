//! Ordering of scored diseases into the top-N ranked list.

use std::cmp::Ordering;

use serde::Serialize;

use super::score::ScoreMap;

/// Number of diseases reported when no limit is configured.
pub const DEFAULT_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// 1-based position after sorting and truncation.
    pub rank: usize,
    #[serde(rename = "name")]
    pub disease: String,
    /// Score relative to the best score of the request, two decimals.
    pub confidence: f64,
    #[serde(rename = "symptom_count")]
    pub score: usize,
}

/// Sort by score descending, ties by disease name ascending, keep `limit` entries.
pub fn rank(scores: &ScoreMap, limit: usize) -> Vec<RankedEntry> {
    let best = scores.values().copied().max().unwrap_or(0);
    if best == 0 {
        return Vec::new();
    }
    let mut ordered: Vec<(&String, usize)> = scores.iter().map(|(d, s)| (d, *s)).collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| compare_names(a.0, b.0)));
    ordered
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(pos, (disease, score))| RankedEntry {
            rank: pos + 1,
            disease: disease.clone(),
            confidence: confidence(score, best),
            score,
        })
        .collect()
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// `score / best` rounded to two decimals; zero when `best` is zero.
pub fn confidence(score: usize, best: usize) -> f64 {
    if best == 0 {
        return 0.0;
    }
    ((score as f64 / best as f64) * 100.0).round() / 100.0
}
