use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use clinic_vitals_domain::health::{
    create_default_health_service, ComponentStatus as DomainComponentStatus, HealthServiceTrait,
    SystemStatus,
};

use crate::config::AppConfig;

/// Service type for dependency injection
pub type SharedHealthService = Arc<dyn HealthServiceTrait + Send + Sync>;

/// Health check response with table and runtime information
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok", "degraded", or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// RFC 3339 time at which the components were checked
    pub timestamp: String,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Status of each clinical table, keyed by name
    pub components: BTreeMap<String, ComponentHealthStatus>,
    /// Deployment environment
    pub environment: String,
}

/// Health status for an individual component
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok", "degraded", or "error")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

static SERVER_START_TIME: OnceCell<Instant> = OnceCell::new();

/// Record the server start time; later calls keep the first value
pub fn initialize_server_start_time() {
    let _ = SERVER_START_TIME.set(Instant::now());
}

fn uptime_seconds() -> Option<u64> {
    SERVER_START_TIME.get().map(|start| start.elapsed().as_secs())
}

/// Health check endpoint to verify the API is running
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is healthy", body = HealthResponse),
        (status = 503, description = "A clinical table is missing or incomplete", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip(health_service, config))]
pub async fn health_check(
    Extension(health_service): Extension<SharedHealthService>,
    Extension(config): Extension<Arc<AppConfig>>,
) -> impl IntoResponse {
    let system_health = health_service.get_system_health().await;

    let overall_status = match system_health.status {
        SystemStatus::Healthy => "ok",
        SystemStatus::Degraded => "degraded",
        SystemStatus::Unhealthy => "error",
    };

    let components = system_health
        .components
        .iter()
        .map(|(name, component)| {
            (
                name.clone(),
                ComponentHealthStatus {
                    status: map_component_status(&component.status).to_string(),
                    message: component.details.clone(),
                },
            )
        })
        .collect();

    let response = HealthResponse {
        status: overall_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: system_health.checked_at.to_rfc3339(),
        uptime: uptime_seconds(),
        components,
        environment: config.environment.clone(),
    };

    let status_code = match system_health.status {
        SystemStatus::Healthy => {
            info!("Health check passed");
            StatusCode::OK
        }
        SystemStatus::Degraded | SystemStatus::Unhealthy => {
            warn!(status = overall_status, "Health check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    (status_code, Json(response))
}

fn map_component_status(status: &DomainComponentStatus) -> &'static str {
    match status {
        DomainComponentStatus::Healthy => "ok",
        DomainComponentStatus::Degraded => "degraded",
        DomainComponentStatus::Unhealthy => "error",
    }
}

/// Factory function to create a health service
pub fn create_health_service() -> SharedHealthService {
    Arc::new(create_default_health_service())
}
