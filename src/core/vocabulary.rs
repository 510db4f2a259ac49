//! Fixed vocabularies for preference extraction
//!
//! Matching is substring containment against lowercased query text, not
//! tokenization, so multi-word terms must appear contiguously.

/// Fallback gazetteer of known place names, checked in this order
pub static KNOWN_LOCATIONS: &[&str] = &[
    "maharashtra",
    "himachal pradesh",
    "kerala",
    "uttarakhand",
    "gujarat",
    "tamil nadu",
    "rajasthan",
    "london",
];

/// Lodging types in priority order; the first substring hit wins
pub static LODGING_TYPES: &[&str] = &["tent", "cabin", "rv"];

/// Activity terms
pub static ACTIVITIES: &[&str] = &[
    "hiking",
    "bonfire",
    "trekking",
    "boating",
    "cultural shows",
    "stargazing",
    "fishing",
];

/// Amenity terms
pub static AMENITIES: &[&str] = &["toilets", "water", "firewood", "wi-fi"];

/// Find all vocabulary terms contained in the text
///
/// `text` must already be lowercased; terms are stored lowercase.
pub fn find_vocabulary_matches(text: &str, vocabulary: &[&str]) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|term| text.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

/// Count vocabulary terms contained in the text
pub fn count_vocabulary_matches(text: &str, vocabulary: &[&str]) -> usize {
    vocabulary.iter().filter(|term| text.contains(*term)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_word_term_matches_contiguously() {
        let matches = find_vocabulary_matches("evening cultural shows by the lake", ACTIVITIES);
        assert_eq!(matches, vec!["cultural shows"]);

        // The words present but separated must not match
        let separated = find_vocabulary_matches("cultural dance and light shows", ACTIVITIES);
        assert!(separated.is_empty());
    }

    #[test]
    fn test_substring_matching_is_not_word_bounded() {
        // Embedded occurrences count; matching is plain containment
        assert_eq!(count_vocabulary_matches("freshwater spring", AMENITIES), 1);
    }

    #[test]
    fn test_no_matches() {
        assert!(find_vocabulary_matches("quiet mountain retreat", AMENITIES).is_empty());
    }
}
