mod common;

use dx_assistant::{
    triage::{extract, extract::normalize_symptom},
    SymptomIndex,
};
use proptest::prelude::*;

use common::strings;

#[test]
fn empty_and_blank_input_yield_nothing() {
    let index = common::reference().index;
    assert!(extract("", &index).is_empty());
    assert!(extract("  \t\n ", &index).is_empty());
    assert!(extract(" , ,, ", &index).is_empty());
}

#[test]
fn unrecognised_words_are_dropped() {
    let index = common::reference().index;
    assert!(extract("xyzabc random nonsense", &index).is_empty());
    assert_eq!(
        extract("xyzabc fever nonsense", &index),
        strings(&["fever"])
    );
}

#[test]
fn delimiters_and_sentences_match_the_same_symptoms() {
    let index = common::reference().index;
    let expected = strings(&["fever", "cough", "sore throat"]);
    assert_eq!(extract("fever, cough, sore throat", &index), expected);
    assert_eq!(extract("fever cough sore throat", &index), expected);
    assert_eq!(extract("fever,cough,sore throat", &index), expected);
    assert_eq!(
        extract(
            "I have had a fever and a bad cough, plus my sore throat hurts.",
            &index
        ),
        expected
    );
}

#[test]
fn matches_are_case_insensitive_and_deduplicated_in_first_seen_order() {
    let index = common::reference().index;
    assert_eq!(
        extract("Cough, FEVER, then the cough again and more fever", &index),
        strings(&["cough", "fever"])
    );
}

#[test]
fn underscores_and_hyphens_normalise_to_spaces() {
    let index = common::reference().index;
    assert_eq!(normalize_symptom(" Skin_Rash "), "skin rash");
    assert_eq!(extract("skin-rash", &index), strings(&["skin rash"]));
    assert_eq!(extract("SKIN_RASH and itching", &index), strings(&["skin rash", "itching"]));
}

#[test]
fn longest_known_phrase_wins() {
    let index = SymptomIndex::from_pairs([("Pharyngitis", "sore throat"), ("Goitre", "throat")]);
    assert_eq!(extract("a sore throat", &index), strings(&["sore throat"]));
    assert_eq!(extract("my throat", &index), strings(&["throat"]));
    assert_eq!(
        extract("sore throat, then throat swelling", &index),
        strings(&["sore throat", "throat"])
    );
}

#[test]
fn overlapping_phrases_are_all_reported() {
    let index = SymptomIndex::from_pairs([("Pharyngitis", "sore throat"), ("Strep", "throat pain")]);
    assert_eq!(
        extract("sore throat pain", &index),
        strings(&["sore throat", "throat pain"])
    );
    assert_eq!(
        extract("throat pain, sore throat", &index),
        strings(&["throat pain", "sore throat"])
    );
}

#[test]
fn partial_words_do_not_match() {
    let index = common::reference().index;
    assert!(extract("feverish coughing", &index).is_empty());
}

proptest! {
    #[test]
    fn only_unknown_tokens_extract_nothing(
        tokens in prop::collection::vec("zq[a-z]{2,8}", 0..8),
        comma in any::<bool>(),
    ) {
        let index = common::reference().index;
        let text = tokens.join(if comma { ", " } else { " " });
        prop_assert!(extract(&text, &index).is_empty());
    }

    #[test]
    fn renditions_of_the_same_symptoms_agree(
        picked in prop::sample::subsequence(
            vec!["fever", "cough", "sore throat", "vomiting", "headache", "skin rash", "abdominal pain"],
            0..=7,
        ),
    ) {
        let index = common::reference().index;
        let commas = extract(&picked.join(", "), &index);
        let spaces = extract(&picked.join(" "), &index);
        let sentence = extract(&format!("Lately I have noticed {}.", picked.join(" and also ")), &index);
        prop_assert_eq!(&commas, &strings(&picked));
        prop_assert_eq!(&commas, &spaces);
        prop_assert_eq!(&commas, &sentence);
    }
}
