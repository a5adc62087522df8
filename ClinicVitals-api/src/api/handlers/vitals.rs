use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info, instrument, warn};

use clinic_vitals_domain::services::{create_default_vitals_service, VitalsServiceTrait};

use crate::api::error::ApiError;
use crate::entities::common::ErrorResponse;
use crate::entities::vitals::{
    convert_to_public_assessment, convert_to_public_interpretation, convert_to_public_range,
    ClassifyRequest, InterpretRequest, InterpretResponse, PublicAssessment, PublicReferenceRange,
};

/// Service type for dependency injection
pub type SharedVitalsService = Arc<dyn VitalsServiceTrait + Send + Sync>;

/// Create a default service for the handlers to use
pub fn create_service() -> SharedVitalsService {
    Arc::new(create_default_vitals_service())
}

/// Classify a single measurement
///
/// Unparseable values and unknown parameters are not errors; they come back
/// as assessments that say so.
#[utoipa::path(
    post,
    path = "/api/v1/vitals/classify",
    request_body = ClassifyRequest,
    responses(
        (status = 200, description = "Measurement assessed", body = PublicAssessment),
        (status = 400, description = "Missing parameter name", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(service))]
pub async fn classify_measurement(
    State(service): State<SharedVitalsService>,
    Json(request): Json<ClassifyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let parameter = request.parameter.trim();
    if parameter.is_empty() {
        return Err(ApiError::BadRequest("parameter is required".to_string()));
    }

    let assessment = service.classify(parameter, request.value);
    if assessment.status.is_critical() {
        warn!(message = %assessment.message, "Critical measurement");
    } else {
        debug!(status = ?assessment.status, "Measurement classified");
    }

    Ok((StatusCode::OK, Json(convert_to_public_assessment(assessment))))
}

/// Interpret a full set of measurements
#[utoipa::path(
    post,
    path = "/api/v1/vitals/interpret",
    request_body = InterpretRequest,
    responses(
        (status = 200, description = "Measurements interpreted", body = InterpretResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(service, request))]
pub async fn interpret_measurements(
    State(service): State<SharedVitalsService>,
    Json(request): Json<InterpretRequest>,
) -> impl IntoResponse {
    let (measurements, context) = request.into_domain();
    let interpretation = service.interpret(&measurements, &context);

    let abnormal = interpretation
        .values()
        .filter(|assessment| assessment.is_abnormal())
        .count();
    let critical = interpretation
        .values()
        .filter(|assessment| assessment.status.is_critical())
        .count();
    info!(
        supplied = measurements.len(),
        assessed = interpretation.len(),
        abnormal,
        critical,
        "Measurement set interpreted"
    );

    (StatusCode::OK, Json(convert_to_public_interpretation(interpretation)))
}

/// List the reference ranges used by the classifier
#[utoipa::path(
    get,
    path = "/api/v1/vitals/reference-ranges",
    responses(
        (status = 200, description = "Reference ranges", body = Vec<PublicReferenceRange>),
    ),
    tag = "vitals"
)]
#[instrument(skip(service))]
pub async fn list_reference_ranges(State(service): State<SharedVitalsService>) -> impl IntoResponse {
    let ranges: Vec<PublicReferenceRange> = service
        .reference_ranges()
        .into_iter()
        .map(convert_to_public_range)
        .collect();

    Json(ranges)
}
