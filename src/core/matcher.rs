use crate::core::availability::is_available;
use crate::core::scoring::score_campground;
use crate::models::{
    Booking, CampgroundRecord, DateRange, PreferenceSet, ScoredCampground, ScoringWeights,
};

/// Maximum number of recommendations returned by the ranking path
pub const MAX_RESULTS: usize = 3;

/// Whether ranking drops campgrounds whose requested window conflicts with
/// existing bookings
///
/// The booking step enforces availability on its own, so recommendations
/// keep conflicting campgrounds under the default `Ignore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityPolicy {
    #[default]
    Ignore,
    Exclude,
}

/// Result of the ranking process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredCampground>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// # Pipeline stages
/// 1. Active-status filter
/// 2. Availability policy (window vs. booking list)
/// 3. Scoring against the preference set
/// 4. Ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    availability_policy: AvailabilityPolicy,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, availability_policy: AvailabilityPolicy) -> Self {
        Self {
            weights,
            availability_policy,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), AvailabilityPolicy::default())
    }

    /// Rank campgrounds against a preference set
    ///
    /// Only active campgrounds are candidates; zero scores are dropped.
    /// Results come back descending by score, truncated to [`MAX_RESULTS`].
    /// The sort is stable, so equal scores keep catalog order.
    ///
    /// `window` and `bookings` only affect the outcome when the matcher was
    /// built with [`AvailabilityPolicy::Exclude`].
    pub fn rank(
        &self,
        prefs: &PreferenceSet,
        campgrounds: &[CampgroundRecord],
        window: Option<DateRange>,
        bookings: &[Booking],
    ) -> MatchResult {
        let total_candidates = campgrounds.len();

        let mut matches: Vec<ScoredCampground> = campgrounds
            .iter()
            .filter(|camp| camp.is_active())
            .filter(|camp| self.window_permits(camp, window, bookings))
            .filter_map(|camp| {
                let score = score_campground(prefs, camp, &self.weights);
                if score > 0.0 {
                    Some(ScoredCampground {
                        campground: camp.clone(),
                        score,
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(MAX_RESULTS);

        MatchResult {
            matches,
            total_candidates,
        }
    }

    /// Score every active campground, keeping zero scores
    ///
    /// Browse path: callers sort and truncate themselves. Catalog order is
    /// preserved.
    pub fn score_catalog(
        &self,
        prefs: &PreferenceSet,
        campgrounds: &[CampgroundRecord],
    ) -> Vec<ScoredCampground> {
        campgrounds
            .iter()
            .filter(|camp| camp.is_active())
            .map(|camp| ScoredCampground {
                score: score_campground(prefs, camp, &self.weights),
                campground: camp.clone(),
            })
            .collect()
    }

    fn window_permits(
        &self,
        camp: &CampgroundRecord,
        window: Option<DateRange>,
        bookings: &[Booking],
    ) -> bool {
        match (self.availability_policy, window) {
            (AvailabilityPolicy::Exclude, Some(range)) => {
                is_available(&camp.id, range.from, range.to, bookings)
            }
            _ => true,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
