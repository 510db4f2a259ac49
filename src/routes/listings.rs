use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::AppState;
use crate::models::{
    AckResponse, AddListingRequest, ErrorResponse, ListingsResponse, UpdateListingRequest,
};
use crate::services::{CatalogError, ListingUpdate, NewListing};

/// Configure owner listing-management routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/listings", web::get().to(owner_listings))
        .route("/listings", web::post().to(add_listing))
        .route("/listings/{name}", web::put().to(update_listing))
        .route("/listings/{name}", web::delete().to(remove_listing))
        .route("/listings/{name}/toggle", web::post().to(toggle_status));
}

/// Listings owned by one user
///
/// GET /api/v1/listings?owner={username}
async fn owner_listings(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let owner = match query.get("owner") {
        Some(owner) => owner,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing owner parameter".to_string(),
                message: "owner query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    let listings = state.catalog.listings_for_owner(owner).await;
    HttpResponse::Ok().json(ListingsResponse {
        count: listings.len(),
        listings,
    })
}

/// Create a new listing owned by the caller
///
/// POST /api/v1/listings
async fn add_listing(state: web::Data<AppState>, req: web::Json<AddListingRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let new = NewListing {
        name: req.name,
        location: req.location,
        lodging_type: req.lodging_type,
        activities: req.activities,
        amenities: req.amenities,
        owner_id: req.username,
    };

    match state.catalog.add_listing(new).await {
        Ok(record) => HttpResponse::Created().json(record),
        Err(CatalogError::DuplicateName(name)) => HttpResponse::Conflict().json(ErrorResponse {
            error: "Duplicate listing name".to_string(),
            message: name,
            status_code: 409,
        }),
        Err(e) => {
            tracing::error!("Failed to add listing: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to add listing".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Update an existing listing by name
///
/// PUT /api/v1/listings/{name}
async fn update_listing(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdateListingRequest>,
) -> impl Responder {
    let name = path.into_inner();
    let req = req.into_inner();
    let update = ListingUpdate {
        location: req.location,
        lodging_type: req.lodging_type,
        activities: req.activities,
        amenities: req.amenities,
        status: req.status,
    };

    match state.catalog.update_listing(&name, update).await {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(CatalogError::NotFound(name)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Campground not found".to_string(),
            message: name,
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to update listing {}: {}", name, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to update listing".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Delete a listing by name
///
/// DELETE /api/v1/listings/{name}
async fn remove_listing(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();

    match state.catalog.remove_listing(&name).await {
        Ok(()) => HttpResponse::Ok().json(AckResponse { success: true }),
        Err(CatalogError::NotFound(name)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Campground not found".to_string(),
            message: name,
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to remove listing {}: {}", name, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to remove listing".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Flip a listing between Active and Inactive
///
/// POST /api/v1/listings/{name}/toggle
async fn toggle_status(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();

    match state.catalog.toggle_status(&name).await {
        Ok(status) => HttpResponse::Ok().json(serde_json::json!({
            "name": name,
            "status": status,
        })),
        Err(CatalogError::NotFound(name)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Campground not found".to_string(),
            message: name,
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to toggle listing {}: {}", name, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to toggle listing".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
