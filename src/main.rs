mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use crate::config::Settings;
use crate::core::{AvailabilityPolicy, Matcher, PreferenceExtractor};
use crate::routes::AppState;
use crate::services::{BookingStore, CartStore, CatalogStore, InteractionLog, UserStore};
use std::sync::Arc;
use tracing::{error, info};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    // Initialize logging; environment variables override the config file
    let log_level =
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting campscout service...");
    info!("Configuration loaded successfully");

    // Open flat-file stores
    let storage = settings.storage.clone();

    let catalog = Arc::new(CatalogStore::open(storage.campground_path()).await.unwrap_or_else(|e| {
        error!("Failed to open campground catalog: {}", e);
        panic!("Catalog error: {}", e);
    }));

    let users = Arc::new(UserStore::open(storage.users_path()).await.unwrap_or_else(|e| {
        error!("Failed to open user store: {}", e);
        panic!("User store error: {}", e);
    }));

    let bookings = Arc::new(BookingStore::open(storage.bookings_path()).await.unwrap_or_else(|e| {
        error!("Failed to open booking store: {}", e);
        panic!("Booking store error: {}", e);
    }));

    let interactions = Arc::new(InteractionLog::open(storage.log_dir_path()).await.unwrap_or_else(|e| {
        error!("Failed to open interaction log: {}", e);
        panic!("Interaction log error: {}", e);
    }));

    let cart = Arc::new(CartStore::new());

    info!("Stores initialized under {}", storage.data_dir);

    // The entity recognizer behind the extractor is process-wide state,
    // constructed exactly once and shared across workers
    let extractor = Arc::new(PreferenceExtractor::with_gazetteer());

    // Initialize matcher with configured weights and availability policy
    let weights = settings.scoring.profile.weights();
    let policy = if settings.matching.exclude_unavailable {
        AvailabilityPolicy::Exclude
    } else {
        AvailabilityPolicy::Ignore
    };
    let matcher = Matcher::new(weights, policy);

    info!("Matcher initialized with weights: {:?}, policy: {:?}", weights, policy);

    // Build application state
    let app_state = AppState {
        catalog,
        users,
        bookings,
        cart,
        interactions,
        extractor,
        matcher,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
