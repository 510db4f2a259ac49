use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusive booking date range as stored inside a campground record
///
/// Both endpoints count as occupied days: a range ending on day X conflicts
/// with a range starting on day X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Standard inclusive interval-overlap test
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.from <= other.to && self.to >= other.from
    }
}

/// Listing visibility status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampStatus {
    Active,
    Inactive,
}

impl CampStatus {
    pub fn toggled(self) -> Self {
        match self {
            CampStatus::Active => CampStatus::Inactive,
            CampStatus::Inactive => CampStatus::Active,
        }
    }
}

/// Campground listing, in the campground.json file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampgroundRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub lodging_type: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub status: CampStatus,
    pub owner_id: String,
    #[serde(default)]
    pub bookings: Vec<DateRange>,
}

impl CampgroundRecord {
    pub fn is_active(&self) -> bool {
        self.status == CampStatus::Active
    }
}

/// Confirmed reservation, in the bookings.json file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub username: String,
    pub camp_id: String,
    pub camp_name: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl Booking {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.from_date, self.to_date)
    }
}

/// Structured preference tag set extracted from a free-text query
///
/// Built fresh per query and never mutated afterwards. All strings are
/// lowercased at extraction time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    pub location: Option<String>,
    pub lodging_type: Option<String>,
    pub activities: BTreeSet<String>,
    pub amenities: BTreeSet<String>,
}

impl PreferenceSet {
    /// True when extraction understood nothing in the query text.
    ///
    /// The matcher cannot distinguish "no matches" from "empty query", so
    /// callers must reject empty sets before ranking.
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.lodging_type.is_none()
            && self.activities.is_empty()
            && self.amenities.is_empty()
    }
}

/// Scored match result, transient per query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCampground {
    #[serde(flatten)]
    pub campground: CampgroundRecord,
    #[serde(rename = "matchScore")]
    pub score: f64,
}

/// User account kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Guest,
    Owner,
}

/// Registered user, in the users.json file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub history: Vec<String>,
}

/// Cart entry held per user between add-to-cart and checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "campId")]
    pub camp_id: String,
    #[serde(rename = "campName")]
    pub camp_name: String,
    #[serde(rename = "fromDate")]
    pub from_date: NaiveDate,
    #[serde(rename = "toDate")]
    pub to_date: NaiveDate,
}

impl CartItem {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.from_date, self.to_date)
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub location: f64,
    pub lodging_type: f64,
    pub activity: f64,
    pub amenity: f64,
}

impl ScoringWeights {
    /// Browse profile that weighs a location hit above everything else.
    pub fn location_heavy() -> Self {
        Self {
            location: 4.0,
            ..Self::default()
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 3.0,
            lodging_type: 1.0,
            activity: 1.0,
            amenity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_range_overlap_inclusive_endpoints() {
        let a = DateRange::new(date("2024-06-01"), date("2024-06-05"));
        let b = DateRange::new(date("2024-06-05"), date("2024-06-10"));

        // Shared endpoint day counts as occupied on both sides
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_range_no_overlap() {
        let a = DateRange::new(date("2024-06-01"), date("2024-06-05"));
        let b = DateRange::new(date("2024-06-06"), date("2024-06-10"));

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(CampStatus::Active.toggled(), CampStatus::Inactive);
        assert_eq!(CampStatus::Inactive.toggled(), CampStatus::Active);
    }

    #[test]
    fn test_empty_preference_set() {
        let prefs = PreferenceSet::default();
        assert!(prefs.is_empty());

        let mut with_location = PreferenceSet::default();
        with_location.location = Some("kerala".to_string());
        assert!(!with_location.is_empty());
    }

    #[test]
    fn test_campground_record_json_format() {
        let json = r#"{
            "id": "C1",
            "name": "Misty Pines",
            "location": "Kerala",
            "type": "Tent",
            "activities": ["Hiking", "Bonfire"],
            "amenities": ["Toilets"],
            "status": "Active",
            "owner_id": "ravi",
            "bookings": [{"from": "2024-06-01", "to": "2024-06-05"}]
        }"#;

        let record: CampgroundRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.lodging_type, "Tent");
        assert!(record.is_active());
        assert_eq!(record.bookings.len(), 1);
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.location, 3.0);
        assert_eq!(weights.lodging_type, 1.0);

        let heavy = ScoringWeights::location_heavy();
        assert_eq!(heavy.location, 4.0);
        assert_eq!(heavy.amenity, 1.0);
    }
}
