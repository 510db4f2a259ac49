// Core algorithm exports
pub mod availability;
pub mod extractor;
pub mod matcher;
pub mod scoring;
pub mod vocabulary;

pub use availability::{is_available, parse_date, AvailabilityError};
pub use extractor::{Entity, EntityKind, EntityRecognizer, GazetteerRecognizer, PreferenceExtractor};
pub use matcher::{AvailabilityPolicy, MatchResult, Matcher, MAX_RESULTS};
pub use scoring::score_campground;
