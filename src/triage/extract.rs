//! Free-text symptom extraction against the known-symptom set.

use std::cmp::Ordering;

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use strsim::jaro_winkler;

use crate::data::SymptomIndex;

/// Similarity above which an unknown word is offered a known symptom as a hint.
pub const SUGGESTION_THRESHOLD: f64 = 0.82;

static WORD_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{Alphabetic}\p{Nd}']+").expect("valid regex"));

/// Lowercase `text` and split it into words. Commas, whitespace, underscores,
/// hyphens and other punctuation are all treated as breaks.
pub fn words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_BREAK
        .split(&lower)
        .map(|word| word.trim_matches('\''))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Canonical form of a symptom: its words joined by single spaces.
pub fn normalize_symptom(raw: &str) -> String {
    words(raw).join(" ")
}

/// Known symptoms found in `text`, deduplicated, in order of first occurrence.
///
/// Every known phrase starting at each word is considered, so overlapping
/// symptoms such as `sore throat` and `throat pain` are both reported for
/// `sore throat pain`. A phrase lying wholly inside a longer match is dropped:
/// `throat` is not reported for `sore throat`. Unrecognised words are skipped.
pub fn extract(text: &str, index: &SymptomIndex) -> Vec<String> {
    let words = words(text);
    phrase_spans(&words, index)
        .into_iter()
        .map(|(start, len)| words[start..start + len].join(" "))
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// `(start, len)` word spans of known phrases not contained in a longer one.
fn phrase_spans(words: &[String], index: &SymptomIndex) -> Vec<(usize, usize)> {
    let longest = index.max_phrase_words();
    let mut spans = Vec::new();
    // End of the furthest-reaching span accepted so far.
    let mut reach = 0;
    for pos in 0..words.len() {
        let hit = (1..=longest.min(words.len() - pos))
            .rev()
            .find(|len| index.is_known(&words[pos..pos + len].join(" ")));
        if let Some(len) = hit {
            if pos + len > reach {
                spans.push((pos, len));
                reach = pos + len;
            }
        }
    }
    spans
}

/// Closest known symptoms for words that did not match, at most `limit`.
///
/// Words covered by a matched phrase are never treated as unrecognised, and
/// symptoms already matched are not offered again.
pub fn suggest(text: &str, index: &SymptomIndex, limit: usize) -> Vec<String> {
    let words = words(text);
    let spans = phrase_spans(&words, index);
    let mut covered = vec![false; words.len()];
    let mut matched = IndexSet::new();
    for &(start, len) in &spans {
        covered[start..start + len].fill(true);
        matched.insert(words[start..start + len].join(" "));
    }

    let mut hints = IndexSet::new();
    for (word, _) in words.iter().zip(&covered).filter(|(_, covered)| !**covered) {
        if hints.len() >= limit {
            break;
        }
        let best = index
            .known_symptoms()
            .filter(|symptom| !matched.contains(*symptom))
            .map(|symptom| (jaro_winkler(word, symptom), symptom))
            .filter(|(similarity, _)| *similarity > SUGGESTION_THRESHOLD)
            .max_by(|a, b| {
                a.0.partial_cmp(&b.0)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| b.1.cmp(a.1))
            });
        if let Some((_, symptom)) = best {
            hints.insert(symptom.to_string());
        }
    }
    hints.into_iter().collect()
}
