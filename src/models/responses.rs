use serde::{Deserialize, Serialize};
use crate::models::domain::{CampgroundRecord, CartItem, ScoredCampground, UserType};

/// Response for the search and recommend endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub recommendations: Vec<ScoredCampground>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
}

/// Availability verdict for a campground and date window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(rename = "campId")]
    pub camp_id: String,
    pub available: bool,
}

/// Current cart contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub count: usize,
}

/// Checkout confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub success: bool,
    #[serde(rename = "bookingsCreated")]
    pub bookings_created: usize,
}

/// Listings owned by one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub listings: Vec<CampgroundRecord>,
    pub count: usize,
}

/// Favorites and query history for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub username: String,
    pub favorites: Vec<String>,
    pub history: Vec<String>,
}

/// Generic acknowledgement for mutations with no payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
}
