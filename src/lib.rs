//! Campscout - campground recommendation and booking service
//!
//! This library provides the preference extraction and matching engine used
//! by the campscout service: free text goes in, a structured preference tag
//! set comes out, and campgrounds are scored and ranked against it with an
//! availability check over inclusive booking date ranges.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    is_available, parse_date, AvailabilityPolicy, Matcher, PreferenceExtractor,
};
pub use crate::models::{
    Booking, CampgroundRecord, DateRange, PreferenceSet, ScoredCampground, ScoringWeights,
};
