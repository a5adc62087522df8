use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;
use validator::ValidationErrors;

use crate::entities::common::ErrorResponse;

/// Errors returned by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed field validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Request is well-formed but cannot be processed
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Flatten validator errors into `field: message` strings
fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |err| match &err.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: invalid value", field),
            })
        })
        .collect();

    serde_json::json!(messages)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                let body = ErrorResponse::validation_error(
                    "Request validation failed",
                    Some(validation_details(&errors)),
                );
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::BadRequest(message) => {
                warn!("Rejected request: {}", message);
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(&message))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::dosage::QuantityRequest;
    use validator::Validate;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let request = QuantityRequest {
            frequency_code: "BD".to_string(),
            duration_days: 0,
        };
        let errors = request.validate().unwrap_err();
        let response = ApiError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_details_name_the_field() {
        let request = QuantityRequest {
            frequency_code: String::new(),
            duration_days: 7,
        };
        let details = validation_details(&request.validate().unwrap_err());
        assert!(details.to_string().contains("frequency_code"));
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = ApiError::BadRequest("parameter is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
