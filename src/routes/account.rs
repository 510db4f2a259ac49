use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::AppState;
use crate::models::{
    AckResponse, ErrorResponse, FavoriteRequest, LoginRequest, LoginResponse, ProfileResponse,
};
use crate::services::UserError;

/// Configure account, favorites and profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/login", web::post().to(login))
        .route("/favorites", web::post().to(add_favorite))
        .route("/favorites", web::delete().to(remove_favorite))
        .route("/profile", web::get().to(profile));
}

/// Log in with a registered username
///
/// POST /api/v1/auth/login
///
/// There is no password; registration is handled out of band and login only
/// resolves the account type.
async fn login(state: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.users.find(&req.username).await {
        Some(user) => {
            tracing::info!("Login: {} ({:?})", user.username, user.user_type);
            HttpResponse::Ok().json(LoginResponse {
                username: user.username,
                user_type: user.user_type,
            })
        }
        None => HttpResponse::Unauthorized().json(ErrorResponse {
            error: "Not registered".to_string(),
            message: "You are not registered with us. Please contact admin".to_string(),
            status_code: 401,
        }),
    }
}

/// Mark a campground as favorite
///
/// POST /api/v1/favorites
async fn add_favorite(state: web::Data<AppState>, req: web::Json<FavoriteRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if state.catalog.find_by_name(&req.name).await.is_none() {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Campground not found".to_string(),
            message: req.name.clone(),
            status_code: 404,
        });
    }

    match state.users.add_favorite(&req.username, &req.name).await {
        Ok(()) => HttpResponse::Ok().json(AckResponse { success: true }),
        Err(UserError::NotFound(username)) => HttpResponse::Unauthorized().json(ErrorResponse {
            error: "Unknown user".to_string(),
            message: format!("User {} is not registered", username),
            status_code: 401,
        }),
        Err(e) => {
            tracing::error!("Failed to add favorite for {}: {}", req.username, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to save favorite".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Remove a campground from favorites
///
/// DELETE /api/v1/favorites
async fn remove_favorite(
    state: web::Data<AppState>,
    req: web::Json<FavoriteRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.users.remove_favorite(&req.username, &req.name).await {
        Ok(()) => HttpResponse::Ok().json(AckResponse { success: true }),
        Err(UserError::NotFound(username)) => HttpResponse::Unauthorized().json(ErrorResponse {
            error: "Unknown user".to_string(),
            message: format!("User {} is not registered", username),
            status_code: 401,
        }),
        Err(e) => {
            tracing::error!("Failed to remove favorite for {}: {}", req.username, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to remove favorite".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Favorites and query history for a user
///
/// GET /api/v1/profile?username={username}
async fn profile(
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

    match state.users.find(username).await {
        Some(user) => HttpResponse::Ok().json(ProfileResponse {
            username: user.username,
            favorites: user.favorites,
            history: user.history,
        }),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Unknown user".to_string(),
            message: format!("User {} is not registered", username),
            status_code: 404,
        }),
    }
}
