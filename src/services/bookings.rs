use crate::core::availability::is_available;
use crate::models::Booking;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur with booking store operations
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("booking store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed bookings file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("campground '{0}' is already booked for the selected dates")]
    Conflict(String),
}

/// Flat-file booking store backing bookings.json
///
/// The availability checker is the single authority consulted before any
/// booking is written, so two bookings for the same campground never hold
/// overlapping inclusive date ranges.
pub struct BookingStore {
    path: PathBuf,
    bookings: RwLock<Vec<Booking>>,
}

impl BookingStore {
    /// Open the bookings file, creating an empty one if missing
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, BookingError> {
        let path = path.as_ref().to_path_buf();
        let bookings: Vec<Booking> = if tokio::fs::try_exists(&path).await? {
            let raw = tokio::fs::read_to_string(&path).await?;
            serde_json::from_str(&raw)?
        } else {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, "[]").await?;
            Vec::new()
        };

        tracing::info!(
            "Booking store loaded: {} bookings from {}",
            bookings.len(),
            path.display()
        );

        Ok(Self {
            path,
            bookings: RwLock::new(bookings),
        })
    }

    /// Point-in-time copy of all bookings for one availability run
    pub async fn snapshot(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }

    /// Verify availability for every new booking, then append and persist
    ///
    /// Runs entirely under the write lock, so two concurrent checkouts
    /// cannot both pass the check. Items are staged one at a time, which
    /// also catches conflicts between bookings in the same batch. Nothing
    /// is written if any item conflicts.
    pub async fn commit_if_available(
        &self,
        new_bookings: Vec<Booking>,
    ) -> Result<(), BookingError> {
        let mut bookings = self.bookings.write().await;

        let mut staged = bookings.clone();
        for booking in &new_bookings {
            if !is_available(
                &booking.camp_id,
                booking.from_date,
                booking.to_date,
                &staged,
            ) {
                return Err(BookingError::Conflict(booking.camp_name.clone()));
            }
            staged.push(booking.clone());
        }

        let json = serde_json::to_string_pretty(&staged)?;
        tokio::fs::write(&self.path, json).await?;
        *bookings = staged;

        tracing::info!("Committed {} bookings", new_bookings.len());
        Ok(())
    }
}
