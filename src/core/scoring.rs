use crate::models::{CampgroundRecord, PreferenceSet, ScoringWeights};
use std::collections::BTreeSet;

/// Score one campground against an extracted preference set
///
/// Location and lodging type award their weight on a case-insensitive
/// substring hit; activities and amenities award their weight per term in
/// the set intersection. Campground-side terms are lowercased and trimmed
/// before comparison.
pub fn score_campground(
    prefs: &PreferenceSet,
    camp: &CampgroundRecord,
    weights: &ScoringWeights,
) -> f64 {
    let mut score = 0.0;

    if let Some(location) = &prefs.location {
        if camp.location.to_lowercase().contains(location.as_str()) {
            score += weights.location;
        }
    }

    if let Some(lodging) = &prefs.lodging_type {
        if camp.lodging_type.to_lowercase().contains(lodging.as_str()) {
            score += weights.lodging_type;
        }
    }

    score += weights.activity * overlap_count(&prefs.activities, &camp.activities) as f64;
    score += weights.amenity * overlap_count(&prefs.amenities, &camp.amenities) as f64;

    score
}

/// Set intersection cardinality; duplicates on the campground side count once
#[inline]
fn overlap_count(wanted: &BTreeSet<String>, offered: &[String]) -> usize {
    let offered: BTreeSet<String> = offered.iter().map(|term| term.trim().to_lowercase()).collect();
    wanted.intersection(&offered).count()
}
