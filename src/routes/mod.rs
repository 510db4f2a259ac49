// Route exports
pub mod account;
pub mod cart;
pub mod listings;
pub mod search;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{Matcher, PreferenceExtractor};
use crate::models::HealthResponse;
use crate::services::{BookingStore, CartStore, CatalogStore, InteractionLog, UserStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub users: Arc<UserStore>,
    pub bookings: Arc<BookingStore>,
    pub cart: Arc<CartStore>,
    pub interactions: Arc<InteractionLog>,
    pub extractor: Arc<PreferenceExtractor>,
    pub matcher: Matcher,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(search::configure)
            .configure(cart::configure)
            .configure(listings::configure)
            .configure(account::configure),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
