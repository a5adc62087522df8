use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, instrument};
use validator::Validate;

use clinic_vitals_domain::services::{create_default_dosage_service, DosageServiceTrait};

use crate::api::error::ApiError;
use crate::entities::common::ErrorResponse;
use crate::entities::dosage::{
    convert_to_public_frequency, PublicDosageFrequency, QuantityRequest, QuantityResponse,
};

/// Service type for dependency injection
pub type SharedDosageService = Arc<dyn DosageServiceTrait + Send + Sync>;

/// Create a default service for the handlers to use
pub fn create_service() -> SharedDosageService {
    Arc::new(create_default_dosage_service())
}

fn normalize_frequency_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Calculate the total quantity to dispense for a prescription
///
/// The code is trimmed and upper-cased before lookup, and the response
/// echoes the normalized code.
#[utoipa::path(
    post,
    path = "/api/v1/dosage/quantity",
    request_body = QuantityRequest,
    responses(
        (status = 200, description = "Quantity calculated", body = QuantityResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    tag = "dosage"
)]
#[instrument(skip(service))]
pub async fn calculate_quantity(
    State(service): State<SharedDosageService>,
    Json(request): Json<QuantityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    // Table codes are upper case; accept any case from clients
    let frequency_code = normalize_frequency_code(&request.frequency_code);
    let quantity = service.total_quantity(&frequency_code, request.duration_days);
    let recognized = service.find_frequency(&frequency_code).is_some();
    info!(quantity, recognized, "Dispensing quantity calculated");

    let response = QuantityResponse {
        frequency_code,
        duration_days: request.duration_days,
        quantity,
        recognized,
    };

    Ok((StatusCode::OK, Json(response)))
}

/// List the supported frequency codes
#[utoipa::path(
    get,
    path = "/api/v1/dosage/frequencies",
    responses(
        (status = 200, description = "Frequency codes", body = Vec<PublicDosageFrequency>),
    ),
    tag = "dosage"
)]
#[instrument(skip(service))]
pub async fn list_frequencies(State(service): State<SharedDosageService>) -> impl IntoResponse {
    let frequencies: Vec<PublicDosageFrequency> = service
        .frequencies()
        .into_iter()
        .map(convert_to_public_frequency)
        .collect();

    Json(frequencies)
}
