use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::AppState;
use crate::core::{is_available, parse_date, MAX_RESULTS};
use crate::models::{
    AvailabilityQuery, AvailabilityResponse, DateRange, ErrorResponse, RecommendRequest,
    SearchRequest, SearchResponse,
};

/// Configure search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/search", web::post().to(search))
        .route("/recommend", web::post().to(recommend))
        .route("/availability", web::get().to(availability));
}

/// Full search with an availability window
///
/// POST /api/v1/search
///
/// Request body:
/// ```json
/// {
///   "username": "string",
///   "query": "tent in kerala with hiking",
///   "fromDate": "2024-06-01",
///   "toDate": "2024-06-05"
/// }
/// ```
async fn search(state: web::Data<AppState>, req: web::Json<SearchRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
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

    if state.users.find(&req.username).await.is_none() {
        return HttpResponse::Unauthorized().json(ErrorResponse {
            error: "Unknown user".to_string(),
            message: format!("User {} is not registered", req.username),
            status_code: 401,
        });
    }

    let prefs = state.extractor.extract(&req.query);
    // The engine cannot tell "no matches" from "empty query"; reject here
    if prefs.is_empty() {
        tracing::info!("Nothing extracted from query: {:?}", req.query);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Query not understood".to_string(),
            message: "Could not find any preferences in the query text".to_string(),
            status_code: 400,
        });
    }

    let catalog = state.catalog.snapshot().await;
    let bookings = state.bookings.snapshot().await;

    let result = state
        .matcher
        .rank(&prefs, &catalog, Some(DateRange::new(from, to)), &bookings);

    tracing::info!(
        "Search for {}: {} matches from {} candidates",
        req.username,
        result.matches.len(),
        result.total_candidates
    );

    if let Err(e) = state.users.append_history(&req.username, &req.query).await {
        tracing::warn!("Failed to append history for {}: {}", req.username, e);
    }
    if let Err(e) = state
        .interactions
        .record(&req.username, &req.query, &result.matches)
        .await
    {
        tracing::warn!("Failed to write interaction log: {}", e);
    }

    HttpResponse::Ok().json(SearchResponse {
        recommendations: result.matches,
        total_candidates: result.total_candidates,
    })
}

/// Dateless browse recommendation
///
/// POST /api/v1/recommend
///
/// Scores the whole active catalog and returns the top entries; zero scores
/// are not dropped at the scoring layer on this path.
async fn recommend(state: web::Data<AppState>, req: web::Json<RecommendRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if state.users.find(&req.username).await.is_none() {
        return HttpResponse::Unauthorized().json(ErrorResponse {
            error: "Unknown user".to_string(),
            message: format!("User {} is not registered", req.username),
            status_code: 401,
        });
    }

    let prefs = state.extractor.extract(&req.query);
    if prefs.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Query not understood".to_string(),
            message: "Could not find any preferences in the query text".to_string(),
            status_code: 400,
        });
    }

    let catalog = state.catalog.snapshot().await;
    let total_candidates = catalog.len();

    let mut scored = state.matcher.score_catalog(&prefs, &catalog);
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(MAX_RESULTS);

    tracing::info!(
        "Recommendations for {}: {} results",
        req.username,
        scored.len()
    );

    if let Err(e) = state.users.append_history(&req.username, &req.query).await {
        tracing::warn!("Failed to append history for {}: {}", req.username, e);
    }
    if let Err(e) = state
        .interactions
        .record(&req.username, &req.query, &scored)
        .await
    {
        tracing::warn!("Failed to write interaction log: {}", e);
    }

    HttpResponse::Ok().json(SearchResponse {
        recommendations: scored,
        total_candidates,
    })
}

/// Availability verdict for one campground and window
///
/// GET /api/v1/availability?campId=C1&fromDate=2024-06-01&toDate=2024-06-05
async fn availability(
    state: web::Data<AppState>,
    query: web::Query<AvailabilityQuery>,
) -> impl Responder {
    let from = match parse_date(&query.from_date) {
        Ok(date) => date,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid date format".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };
    let to = match parse_date(&query.to_date) {
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

    if state.catalog.find_by_id(&query.camp_id).await.is_none() {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Campground not found".to_string(),
            message: query.camp_id.clone(),
            status_code: 404,
        });
    }

    let bookings = state.bookings.snapshot().await;
    let available = is_available(&query.camp_id, from, to, &bookings);

    HttpResponse::Ok().json(AvailabilityResponse {
        camp_id: query.camp_id.clone(),
        available,
    })
}
