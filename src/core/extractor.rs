use crate::core::vocabulary::{
    find_vocabulary_matches, ACTIVITIES, AMENITIES, KNOWN_LOCATIONS, LODGING_TYPES,
};
use crate::models::PreferenceSet;
use std::sync::Arc;

/// Categories an entity recognizer can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Place,
    Other,
}

/// A recognized entity
#[derive(Debug, Clone)]
pub struct Entity {
    pub text: String,
    pub kind: EntityKind,
}

/// Capability interface for named-entity recognition over query text
///
/// Implementations must report entities in left-to-right text order; the
/// extractor takes the first `Place` it sees. Built once at startup and
/// shared, so implementations carry their own state (model handles, lookup
/// tables) behind `&self`.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Gazetteer-backed recognizer
///
/// Reports every known place name contained in the text, ordered by first
/// byte position. Deterministic for a given input.
#[derive(Debug, Default)]
pub struct GazetteerRecognizer;

impl EntityRecognizer for GazetteerRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let lowered = text.to_lowercase();
        let mut found: Vec<(usize, &str)> = KNOWN_LOCATIONS
            .iter()
            .filter_map(|place| lowered.find(place).map(|pos| (pos, *place)))
            .collect();
        found.sort_by_key(|(pos, _)| *pos);

        found
            .into_iter()
            .map(|(_, place)| Entity {
                text: place.to_string(),
                kind: EntityKind::Place,
            })
            .collect()
    }
}

/// Free-text preference extractor
///
/// Turns an arbitrary query string into a [`PreferenceSet`]: place entity (or
/// gazetteer fallback) for location, then substring extraction against the
/// fixed lodging/activity/amenity vocabularies. Never fails; text with no
/// recognizable terms yields an all-empty set.
pub struct PreferenceExtractor {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl PreferenceExtractor {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Extractor backed by the built-in gazetteer recognizer
    pub fn with_gazetteer() -> Self {
        Self::new(Arc::new(GazetteerRecognizer))
    }

    pub fn extract(&self, text: &str) -> PreferenceSet {
        let lowered = text.to_lowercase();

        // First recognized place wins; fall back to plain gazetteer scan
        let mut location = self
            .recognizer
            .recognize(&lowered)
            .into_iter()
            .find(|entity| entity.kind == EntityKind::Place)
            .map(|entity| entity.text.trim().to_lowercase());

        if location.is_none() {
            location = KNOWN_LOCATIONS
                .iter()
                .find(|place| lowered.contains(*place))
                .map(|place| place.to_string());
        }

        let lodging_type = LODGING_TYPES
            .iter()
            .find(|lodging| lowered.contains(*lodging))
            .map(|lodging| lodging.to_string());

        PreferenceSet {
            location,
            lodging_type,
            activities: find_vocabulary_matches(&lowered, ACTIVITIES)
                .into_iter()
                .collect(),
            amenities: find_vocabulary_matches(&lowered, AMENITIES)
                .into_iter()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Recognizer that reports a fixed entity list, for injection tests
    struct StubRecognizer(Vec<Entity>);

    impl EntityRecognizer for StubRecognizer {
        fn recognize(&self, _text: &str) -> Vec<Entity> {
            self.0.clone()
        }
    }

    #[test]
    fn test_full_query_extraction() {
        let extractor = PreferenceExtractor::with_gazetteer();
        let prefs = extractor.extract("I want a tent in Kerala with hiking and bonfire");

        assert_eq!(prefs.location.as_deref(), Some("kerala"));
        assert_eq!(prefs.lodging_type.as_deref(), Some("tent"));
        assert!(prefs.activities.contains("hiking"));
        assert!(prefs.activities.contains("bonfire"));
        assert_eq!(prefs.activities.len(), 2);
        assert!(prefs.amenities.is_empty());
    }

    #[test]
    fn test_unrecognizable_text_yields_empty_set() {
        let extractor = PreferenceExtractor::with_gazetteer();
        let prefs = extractor.extract("somewhere nice for the weekend");

        assert!(prefs.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let extractor = PreferenceExtractor::with_gazetteer();
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_first_place_entity_wins() {
        let recognizer = StubRecognizer(vec![
            Entity {
                text: "himalayan trails co".to_string(),
                kind: EntityKind::Other,
            },
            Entity {
                text: "uttarakhand".to_string(),
                kind: EntityKind::Place,
            },
            Entity {
                text: "kerala".to_string(),
                kind: EntityKind::Place,
            },
        ]);
        let extractor = PreferenceExtractor::new(Arc::new(recognizer));

        let prefs = extractor.extract("trip to uttarakhand or kerala");
        assert_eq!(prefs.location.as_deref(), Some("uttarakhand"));
    }

    #[test]
    fn test_gazetteer_fallback_order() {
        // A recognizer that finds nothing forces the fallback, which takes
        // the first hit in gazetteer order rather than text order
        let extractor = PreferenceExtractor::new(Arc::new(StubRecognizer(vec![])));
        let prefs = extractor.extract("tamil nadu and maharashtra");

        assert_eq!(prefs.location.as_deref(), Some("maharashtra"));
    }

    #[test]
    fn test_recognizer_reports_leftmost_place_first() {
        let recognizer = GazetteerRecognizer;
        let entities = recognizer.recognize("from Gujarat towards Rajasthan");

        assert_eq!(entities[0].text, "gujarat");
        assert_eq!(entities[1].text, "rajasthan");
    }

    #[test]
    fn test_lodging_priority_order() {
        let extractor = PreferenceExtractor::with_gazetteer();
        // Both terms present; "tent" has higher priority than "cabin"
        let prefs = extractor.extract("a cabin or a tent, either works");

        assert_eq!(prefs.lodging_type.as_deref(), Some("tent"));
    }

    #[test]
    fn test_mixed_case_input() {
        let extractor = PreferenceExtractor::with_gazetteer();
        let prefs = extractor.extract("RV near LONDON with Wi-Fi and Firewood");

        assert_eq!(prefs.location.as_deref(), Some("london"));
        assert_eq!(prefs.lodging_type.as_deref(), Some("rv"));
        assert!(prefs.amenities.contains("wi-fi"));
        assert!(prefs.amenities.contains("firewood"));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = PreferenceExtractor::with_gazetteer();
        let text = "boating and fishing in kerala, toilets a must";

        assert_eq!(extractor.extract(text), extractor.extract(text));
    }
}
