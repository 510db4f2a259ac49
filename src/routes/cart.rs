use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::AppState;
use crate::core::{is_available, parse_date};
use crate::models::{
    AddToCartRequest, Booking, CartItem, CartResponse, CheckoutRequest, CheckoutResponse,
    ErrorResponse,
};
use crate::services::BookingError;

/// Configure cart and checkout routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/cart/add", web::post().to(add_to_cart))
        .route("/cart", web::get().to(view_cart))
        .route("/cart/checkout", web::post().to(checkout));
}

/// Place a campground in the user's cart
///
/// POST /api/v1/cart/add
///
/// Rejected when the campground is already booked for the window, or when
/// the cart already holds the same campground for overlapping dates.
async fn add_to_cart(state: web::Data<AppState>, req: web::Json<AddToCartRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let from = match parse_date(&req.from_date) {
        Ok(date) => date,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid date format".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };
    let to = match parse_date(&req.to_date) {
        Ok(date) => date,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid date format".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    if from > to {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid date range".to_string(),
            message: "Start date cannot be after end date".to_string(),
            status_code: 400,
        });
    }

    let camp = match state.catalog.find_by_id(&req.camp_id).await {
        Some(camp) => camp,
        None => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Campground not found".to_string(),
                message: req.camp_id.clone(),
                status_code: 404,
            });
        }
    };

    // Booking-time availability holds regardless of the matcher's policy
    let bookings = state.bookings.snapshot().await;
    if !is_available(&req.camp_id, from, to, &bookings) {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Unavailable".to_string(),
            message: "This campground is already booked for the selected dates".to_string(),
            status_code: 400,
        });
    }

    let item = CartItem {
        camp_id: camp.id.clone(),
        camp_name: camp.name.clone(),
        from_date: from,
        to_date: to,
    };

    if state.cart.add(&req.username, item).await.is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Already in cart".to_string(),
            message: "Campground already in cart for overlapping dates".to_string(),
            status_code: 400,
        });
    }

    tracing::info!("Cart add for {}: {} [{} .. {}]", req.username, camp.name, from, to);

    let items = state.cart.items(&req.username).await;
    HttpResponse::Ok().json(CartResponse {
        count: items.len(),
        items,
    })
}

/// Current cart contents
///
/// GET /api/v1/cart?username={username}
async fn view_cart(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let username = match query.get("username") {
        Some(name) => name,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing username parameter".to_string(),
                message: "username query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    let items = state.cart.items(username).await;
    HttpResponse::Ok().json(CartResponse {
        count: items.len(),
        items,
    })
}

/// Book everything in the user's cart
///
/// POST /api/v1/cart/checkout
///
/// Availability is re-checked per item under the booking store's write lock;
/// on success the ranges are mirrored into the campground records and the
/// cart is cleared.
async fn checkout(state: web::Data<AppState>, req: web::Json<CheckoutRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let items = state.cart.items(&req.username).await;
    if items.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Cart is empty".to_string(),
            message: "Add a campground to the cart before checking out".to_string(),
            status_code: 400,
        });
    }

    let new_bookings: Vec<Booking> = items
        .iter()
        .map(|item| Booking {
            username: req.username.clone(),
            camp_id: item.camp_id.clone(),
            camp_name: item.camp_name.clone(),
            from_date: item.from_date,
            to_date: item.to_date,
        })
        .collect();

    match state.bookings.commit_if_available(new_bookings).await {
        Ok(()) => {}
        Err(BookingError::Conflict(camp_name)) => {
            return HttpResponse::Conflict().json(ErrorResponse {
                error: "Booking conflict".to_string(),
                message: format!("'{}' was booked by someone else for the selected dates", camp_name),
                status_code: 409,
            });
        }
        Err(e) => {
            tracing::error!("Failed to commit bookings for {}: {}", req.username, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to save bookings".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    }

    // Mirror ranges into the campground records
    for item in &items {
        if let Err(e) = state.catalog.append_booking(&item.camp_id, item.range()).await {
            tracing::warn!("Failed to mirror booking into catalog for {}: {}", item.camp_id, e);
        }
    }

    state.cart.clear(&req.username).await;

    tracing::info!("Checkout complete for {}: {} bookings", req.username, items.len());

    HttpResponse::Ok().json(CheckoutResponse {
        success: true,
        bookings_created: items.len(),
    })
}
