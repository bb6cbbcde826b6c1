use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::subsequence;
use symptom_predictor::{SymptomEncoding, Vocabulary};

const NAMES: [&str; 8] = [
    "itching",
    "skin_rash",
    "continuous_sneezing",
    "shivering",
    "chills",
    "joint_pain",
    "stomach_pain",
    "acidity",
];

fn vocabulary() -> Vocabulary {
    NAMES.into_iter().collect()
}

/// A name from the vocabulary, possibly padded with whitespace
fn padded_known() -> impl Strategy<Value = String> {
    (
        prop::sample::select(NAMES.to_vec()),
        "[ \t\n]{0,3}",
        "[ \t\n]{0,3}",
    )
        .prop_map(|(name, left, right)| format!("{}{}{}", left, name, right))
}

/// A name that is never in the vocabulary once trimmed
fn unknown() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,10}"
}

proptest! {
    #[test]
    fn ones_match_distinct_known_symptoms(symptoms in prop::collection::vec(padded_known(), 0..20)) {
        let vector = vocabulary().encode(&symptoms);
        let distinct: HashSet<&str> = symptoms.iter().map(|s| s.trim()).collect();
        prop_assert_eq!(vector.active_count(), distinct.len());
        prop_assert_eq!(vector.width(), NAMES.len());
    }

    #[test]
    fn order_and_duplicates_do_not_matter(
        symptoms in subsequence(NAMES.to_vec(), 0..=NAMES.len()),
        repeats in 1usize..4,
    ) {
        let vocabulary = vocabulary();
        let once = vocabulary.encode(&symptoms);

        let mut shuffled: Vec<&str> = symptoms
            .iter()
            .flat_map(|s| std::iter::repeat(*s).take(repeats))
            .collect();
        shuffled.reverse();
        prop_assert_eq!(once, vocabulary.encode(&shuffled));
    }

    #[test]
    fn unknown_symptoms_are_ignored(
        known in prop::collection::vec(padded_known(), 0..10),
        noise in prop::collection::vec(unknown(), 0..10),
    ) {
        let vocabulary = vocabulary();
        let mut mixed = known.clone();
        mixed.extend(noise);
        prop_assert_eq!(vocabulary.encode(&known), vocabulary.encode(&mixed));
    }
}
