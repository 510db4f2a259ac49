// Service exports
pub mod bookings;
pub mod cart;
pub mod catalog;
pub mod interaction_log;
pub mod users;

pub use bookings::{BookingError, BookingStore};
pub use cart::{CartError, CartStore};
pub use catalog::{CatalogError, CatalogStore, ListingUpdate, NewListing};
pub use interaction_log::InteractionLog;
pub use users::{UserError, UserStore};
