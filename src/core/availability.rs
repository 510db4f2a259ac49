use crate::models::{Booking, DateRange};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors from availability checking
#[derive(Debug, Error)]
pub enum AvailabilityError {
    #[error("invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parse a `YYYY-MM-DD` date string
///
/// Malformed input surfaces as [`AvailabilityError::InvalidDate`], never a
/// defaulted date.
pub fn parse_date(input: &str) -> Result<NaiveDate, AvailabilityError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|source| AvailabilityError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Check whether a campground is free for the inclusive `[from, to]` window
///
/// Scans bookings for the campground and returns false on the first
/// conflict. `from <= to` is a precondition enforced by callers.
pub fn is_available(camp_id: &str, from: NaiveDate, to: NaiveDate, bookings: &[Booking]) -> bool {
    let requested = DateRange::new(from, to);

    for booking in bookings {
        if booking.camp_id == camp_id && requested.overlaps(&booking.range()) {
            return false;
        }
    }
    true
}
