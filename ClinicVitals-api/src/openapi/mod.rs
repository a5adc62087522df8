use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Vital sign endpoints
        crate::api::handlers::vitals::classify_measurement,
        crate::api::handlers::vitals::interpret_measurements,
        crate::api::handlers::vitals::list_reference_ranges,

        // Dosage endpoints
        crate::api::handlers::dosage::calculate_quantity,
        crate::api::handlers::dosage::list_frequencies
    ),
    components(
        schemas(
            // Entities
            crate::entities::vitals::ClassifyRequest,
            crate::entities::vitals::InterpretRequest,
            crate::entities::vitals::InterpretResponse,
            crate::entities::vitals::PublicAssessment,
            crate::entities::vitals::PublicAssessmentStyle,
            crate::entities::vitals::PublicReferenceRange,
            crate::entities::dosage::QuantityRequest,
            crate::entities::dosage::QuantityResponse,
            crate::entities::dosage::PublicDosageFrequency,
            crate::entities::common::ErrorResponse,

            // Domain enums
            clinic_vitals_domain::entities::AssessmentStatus,
            clinic_vitals_domain::entities::Parameter,
            clinic_vitals_domain::entities::PopulationGroup,
            clinic_vitals_domain::services::BloodPressureCategory,
            clinic_vitals_domain::services::BmiCategory,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentHealthStatus
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "vitals", description = "Vital sign classification and interpretation"),
        (name = "dosage", description = "Prescription quantity calculation")
    ),
    info(
        title = "ClinicVitals API",
        version = "0.1.0",
        description = "Interprets vital-sign readings against adult reference ranges and calculates dispensing quantities",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "ClinicVitals API");
        assert_eq!(openapi.info.version, "0.1.0");

        let tags = openapi.tags.as_ref().unwrap();
        for name in ["health", "vitals", "dosage"] {
            assert!(tags.iter().any(|tag| tag.name == name), "missing tag {}", name);
        }

        for path in [
            "/health",
            "/api/v1/vitals/classify",
            "/api/v1/vitals/interpret",
            "/api/v1/vitals/reference-ranges",
            "/api/v1/dosage/quantity",
            "/api/v1/dosage/frequencies",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing path {}", path);
        }
    }

    #[test]
    fn test_domain_enums_are_documented() {
        let openapi = ApiDoc::openapi();
        let schemas = &openapi.components.as_ref().unwrap().schemas;

        assert!(schemas.contains_key("AssessmentStatus"));
        assert!(schemas.contains_key("Parameter"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
