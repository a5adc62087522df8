use std::sync::Arc;

use axum::{
    extract::FromRef,
    routing::{get, post},
    Extension, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::api::handlers::dosage::{self, SharedDosageService};
use crate::api::handlers::health;
use crate::api::handlers::vitals::{self, SharedVitalsService};
use crate::config::AppConfig;
use crate::openapi::configure_swagger_routes;

/// Services shared by the API handlers
#[derive(Clone, FromRef)]
pub struct AppState {
    pub vitals: SharedVitalsService,
    pub dosage: SharedDosageService,
}

impl AppState {
    /// State backed by the default domain services
    pub fn new() -> Self {
        Self {
            vitals: vitals::create_service(),
            dosage: dosage::create_service(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the application router
pub fn create_app(config: &AppConfig) -> Router {
    debug!("Creating application router");

    let health_service = health::create_health_service();

    let api_routes = Router::new()
        .route("/vitals/classify", post(vitals::classify_measurement))
        .route("/vitals/interpret", post(vitals::interpret_measurements))
        .route("/vitals/reference-ranges", get(vitals::list_reference_ranges))
        .route("/dosage/quantity", post(dosage::calculate_quantity))
        .route("/dosage/frequencies", get(dosage::list_frequencies));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(Arc::new(config.clone())));

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(AppState::new());

    debug!("API routes nested");

    let app = add_swagger_ui(app).layer(TraceLayer::new_for_http());

    if config.cors_allow_any {
        debug!("Permissive CORS enabled");
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
