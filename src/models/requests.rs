use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to log in with a registered username
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
}

/// Request for a full search with an availability window
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub query: String,
    #[validate(length(min = 1))]
    #[serde(alias = "from_date", rename = "fromDate")]
    pub from_date: String,
    #[validate(length(min = 1))]
    #[serde(alias = "to_date", rename = "toDate")]
    pub to_date: String,
}

/// Request for a dateless browse recommendation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub query: String,
}

/// Availability lookup parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    #[serde(alias = "camp_id", rename = "campId")]
    pub camp_id: String,
    #[serde(alias = "from_date", rename = "fromDate")]
    pub from_date: String,
    #[serde(alias = "to_date", rename = "toDate")]
    pub to_date: String,
}

/// Request to place a campground in the user's cart
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddToCartRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    #[serde(alias = "camp_id", rename = "campId")]
    pub camp_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "from_date", rename = "fromDate")]
    pub from_date: String,
    #[validate(length(min = 1))]
    #[serde(alias = "to_date", rename = "toDate")]
    pub to_date: String,
}

/// Request to book everything in the user's cart
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckoutRequest {
    #[validate(length(min = 1))]
    pub username: String,
}

/// Request to create a new listing owned by the caller
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddListingRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(alias = "lodging_type", rename = "type")]
    pub lodging_type: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// Partial update of an existing listing; absent fields keep their value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateListingRequest {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "lodging_type", rename = "type")]
    pub lodging_type: Option<String>,
    #[serde(default)]
    pub activities: Option<Vec<String>>,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub status: Option<crate::models::CampStatus>,
}

/// Request to add or remove a favorite by campground name
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FavoriteRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub name: String,
}
