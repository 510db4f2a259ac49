// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Booking, CampStatus, CampgroundRecord, CartItem, DateRange, PreferenceSet, ScoredCampground,
    ScoringWeights, UserAccount, UserType,
};
pub use requests::{
    AddListingRequest, AddToCartRequest, AvailabilityQuery, CheckoutRequest, FavoriteRequest,
    LoginRequest, RecommendRequest, SearchRequest, UpdateListingRequest,
};
pub use responses::{
    AckResponse, AvailabilityResponse, CartResponse, CheckoutResponse, ErrorResponse,
    HealthResponse, ListingsResponse, LoginResponse, ProfileResponse, SearchResponse,
};
