use crate::models::{CampStatus, CampgroundRecord, DateRange};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur with catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("campground not found: {0}")]
    NotFound(String),

    #[error("a listing named '{0}' already exists")]
    DuplicateName(String),
}

/// Fields for a new listing; id, Active status and empty bookings are
/// assigned by the store
#[derive(Debug, Clone)]
pub struct NewListing {
    pub name: String,
    pub location: String,
    pub lodging_type: String,
    pub activities: Vec<String>,
    pub amenities: Vec<String>,
    pub owner_id: String,
}

/// Partial listing update; absent fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct ListingUpdate {
    pub location: Option<String>,
    pub lodging_type: Option<String>,
    pub activities: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub status: Option<CampStatus>,
}

/// Flat-file campground catalog
///
/// Loads campground.json once at startup, keeps the records in memory behind
/// a read-write lock, and rewrites the whole file after every mutation.
/// Readers get point-in-time copies, so a matching run never observes a
/// half-applied change.
pub struct CatalogStore {
    path: PathBuf,
    records: RwLock<Vec<CampgroundRecord>>,
}

impl CatalogStore {
    /// Open the catalog file, creating an empty one if missing
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();
        let records: Vec<CampgroundRecord> = if tokio::fs::try_exists(&path).await? {
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
            "Catalog loaded: {} campgrounds from {}",
            records.len(),
            path.display()
        );

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Point-in-time copy of the catalog for one matching run
    pub async fn snapshot(&self) -> Vec<CampgroundRecord> {
        self.records.read().await.clone()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<CampgroundRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|camp| camp.id == id)
            .cloned()
    }

    /// Case-insensitive name lookup
    pub async fn find_by_name(&self, name: &str) -> Option<CampgroundRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|camp| camp.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    pub async fn listings_for_owner(&self, owner_id: &str) -> Vec<CampgroundRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|camp| camp.owner_id == owner_id)
            .cloned()
            .collect()
    }

    /// Add a new listing, rejecting duplicate names
    pub async fn add_listing(&self, new: NewListing) -> Result<CampgroundRecord, CatalogError> {
        let mut records = self.records.write().await;

        if records
            .iter()
            .any(|camp| camp.name.eq_ignore_ascii_case(&new.name))
        {
            return Err(CatalogError::DuplicateName(new.name));
        }

        let record = CampgroundRecord {
            id: uuid::Uuid::new_v4().to_string(),
            name: new.name,
            location: new.location,
            lodging_type: new.lodging_type,
            activities: new.activities,
            amenities: new.amenities,
            status: CampStatus::Active,
            owner_id: new.owner_id,
            bookings: vec![],
        };
        records.push(record.clone());
        self.persist(&records).await?;

        tracing::info!("Listing added: {} ({})", record.name, record.id);
        Ok(record)
    }

    pub async fn update_listing(
        &self,
        name: &str,
        update: ListingUpdate,
    ) -> Result<CampgroundRecord, CatalogError> {
        let mut records = self.records.write().await;

        let camp = records
            .iter_mut()
            .find(|camp| camp.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;

        if let Some(location) = update.location {
            camp.location = location;
        }
        if let Some(lodging_type) = update.lodging_type {
            camp.lodging_type = lodging_type;
        }
        if let Some(activities) = update.activities {
            camp.activities = activities;
        }
        if let Some(amenities) = update.amenities {
            camp.amenities = amenities;
        }
        if let Some(status) = update.status {
            camp.status = status;
        }

        let updated = camp.clone();
        self.persist(&records).await?;
        Ok(updated)
    }

    pub async fn remove_listing(&self, name: &str) -> Result<(), CatalogError> {
        let mut records = self.records.write().await;

        let before = records.len();
        records.retain(|camp| !camp.name.eq_ignore_ascii_case(name));
        if records.len() == before {
            return Err(CatalogError::NotFound(name.to_string()));
        }

        self.persist(&records).await?;
        tracing::info!("Listing removed: {}", name);
        Ok(())
    }

    /// Flip a listing between Active and Inactive
    pub async fn toggle_status(&self, name: &str) -> Result<CampStatus, CatalogError> {
        let mut records = self.records.write().await;

        let camp = records
            .iter_mut()
            .find(|camp| camp.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;

        camp.status = camp.status.toggled();
        let status = camp.status;
        self.persist(&records).await?;
        Ok(status)
    }

    /// Mirror a confirmed booking range into the campground record
    pub async fn append_booking(
        &self,
        camp_id: &str,
        range: DateRange,
    ) -> Result<(), CatalogError> {
        let mut records = self.records.write().await;

        let camp = records
            .iter_mut()
            .find(|camp| camp.id == camp_id)
            .ok_or_else(|| CatalogError::NotFound(camp_id.to_string()))?;

        camp.bookings.push(range);
        self.persist(&records).await?;
        Ok(())
    }

    async fn persist(&self, records: &[CampgroundRecord]) -> Result<(), CatalogError> {
        let json = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_listing(name: &str, owner: &str) -> NewListing {
        NewListing {
            name: name.to_string(),
            location: "Kerala".to_string(),
            lodging_type: "Tent".to_string(),
            activities: vec!["Hiking".to_string()],
            amenities: vec!["Toilets".to_string()],
            owner_id: owner.to_string(),
        }
    }

    #[tokio::test]
    async fn test_open_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campground.json");

        let store = CatalogStore::open(&path).await.unwrap();

        assert!(store.snapshot().await.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_add_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campground.json");

        let store = CatalogStore::open(&path).await.unwrap();
        let added = store.add_listing(new_listing("Misty Pines", "ravi")).await.unwrap();
        assert!(added.is_active());
        drop(store);

        // A fresh store sees the persisted listing
        let reopened = CatalogStore::open(&path).await.unwrap();
        let record = reopened.find_by_name("misty pines").await.unwrap();
        assert_eq!(record.id, added.id);
        assert_eq!(record.owner_id, "ravi");
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(dir.path().join("campground.json")).await.unwrap();

        store.add_listing(new_listing("Misty Pines", "ravi")).await.unwrap();
        let err = store
            .add_listing(new_listing("MISTY PINES", "asha"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateName(_)));
    }

    #[tokio::test]
    async fn test_update_listing_partial() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(dir.path().join("campground.json")).await.unwrap();
        store.add_listing(new_listing("Misty Pines", "ravi")).await.unwrap();

        let updated = store
            .update_listing(
                "Misty Pines",
                ListingUpdate {
                    location: Some("Uttarakhand".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.location, "Uttarakhand");
        assert_eq!(updated.lodging_type, "Tent");
    }

    #[tokio::test]
    async fn test_toggle_status_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(dir.path().join("campground.json")).await.unwrap();
        store.add_listing(new_listing("Misty Pines", "ravi")).await.unwrap();

        assert_eq!(store.toggle_status("Misty Pines").await.unwrap(), CampStatus::Inactive);
        assert_eq!(store.toggle_status("Misty Pines").await.unwrap(), CampStatus::Active);
    }

    #[tokio::test]
    async fn test_remove_listing() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(dir.path().join("campground.json")).await.unwrap();
        store.add_listing(new_listing("Misty Pines", "ravi")).await.unwrap();

        store.remove_listing("Misty Pines").await.unwrap();

        assert!(store.find_by_name("Misty Pines").await.is_none());
        assert!(matches!(
            store.remove_listing("Misty Pines").await.unwrap_err(),
            CatalogError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_append_booking_mirrors_range() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(dir.path().join("campground.json")).await.unwrap();
        let added = store.add_listing(new_listing("Misty Pines", "ravi")).await.unwrap();

        let range = DateRange::new(
            "2024-06-01".parse().unwrap(),
            "2024-06-05".parse().unwrap(),
        );
        store.append_booking(&added.id, range).await.unwrap();

        let record = store.find_by_id(&added.id).await.unwrap();
        assert_eq!(record.bookings, vec![range]);
    }

    #[tokio::test]
    async fn test_listings_for_owner() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(dir.path().join("campground.json")).await.unwrap();
        store.add_listing(new_listing("Misty Pines", "ravi")).await.unwrap();
        store.add_listing(new_listing("River Bend", "asha")).await.unwrap();

        let listings = store.listings_for_owner("ravi").await;
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].name, "Misty Pines");
    }
}
