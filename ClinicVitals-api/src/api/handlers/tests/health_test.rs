use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{http::StatusCode, response::IntoResponse, Extension};
use chrono::Utc;

use clinic_vitals_domain::health::{
    check_table, overall_status, HealthServiceTrait, SystemHealth, DOSAGE_FREQUENCIES_COMPONENT,
    EXPECTED_DOSAGE_FREQUENCY_ROWS, EXPECTED_REFERENCE_RANGE_ROWS, REFERENCE_RANGES_COMPONENT,
};

use super::{body_json, get, send, test_app};
use crate::api::handlers::health::{health_check, initialize_server_start_time, SharedHealthService};
use crate::config::AppConfig;

// Reports fixed row counts for the two tables
#[derive(Debug)]
struct FixedTableHealthService {
    reference_rows: usize,
    frequency_rows: usize,
}

#[async_trait]
impl HealthServiceTrait for FixedTableHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let components: HashMap<_, _> = [
            (
                REFERENCE_RANGES_COMPONENT.to_string(),
                check_table(self.reference_rows, EXPECTED_REFERENCE_RANGE_ROWS),
            ),
            (
                DOSAGE_FREQUENCIES_COMPONENT.to_string(),
                check_table(self.frequency_rows, EXPECTED_DOSAGE_FREQUENCY_ROWS),
            ),
        ]
        .into_iter()
        .collect();

        SystemHealth {
            status: overall_status(components.values()),
            components,
            checked_at: Utc::now(),
        }
    }
}

async fn check_with(service: FixedTableHealthService) -> axum::response::Response {
    let service: SharedHealthService = Arc::new(service);
    let config = Arc::new(AppConfig::default());
    health_check(Extension(service), Extension(config)).await.into_response()
}

#[tokio::test]
async fn test_health_route_reports_ok() {
    initialize_server_start_time();
    let response = send(test_app(), get("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["environment"], "development");
    assert_eq!(body["components"][REFERENCE_RANGES_COMPONENT]["status"], "ok");
    assert_eq!(body["components"][DOSAGE_FREQUENCIES_COMPONENT]["status"], "ok");
    assert!(body["uptime"].is_u64());
}

#[tokio::test]
async fn test_incomplete_table_is_degraded() {
    let response = check_with(FixedTableHealthService {
        reference_rows: 5,
        frequency_rows: 12,
    })
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["components"][REFERENCE_RANGES_COMPONENT]["message"], "5 of 7 rows loaded");
}

#[tokio::test]
async fn test_partial_frequency_table_is_degraded() {
    let response = check_with(FixedTableHealthService {
        reference_rows: EXPECTED_REFERENCE_RANGE_ROWS,
        frequency_rows: 3,
    })
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["components"][DOSAGE_FREQUENCIES_COMPONENT]["status"], "degraded");
    assert_eq!(body["components"][DOSAGE_FREQUENCIES_COMPONENT]["message"], "3 of 12 rows loaded");
}

#[tokio::test]
async fn test_empty_table_is_an_error() {
    let response = check_with(FixedTableHealthService {
        reference_rows: 7,
        frequency_rows: 0,
    })
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["components"][DOSAGE_FREQUENCIES_COMPONENT]["status"], "error");
}
