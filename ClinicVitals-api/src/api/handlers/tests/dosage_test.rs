use axum::http::StatusCode;
use serde_json::json;

use super::{body_json, get, post_json, send, test_app};

#[tokio::test]
async fn test_quantity_for_known_code() {
    let response = send(
        test_app(),
        post_json("/api/v1/dosage/quantity", json!({ "frequency_code": "TDS", "duration_days": 7 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["quantity"], 21);
    assert_eq!(body["recognized"], true);
}

#[tokio::test]
async fn test_quantity_normalizes_code_case() {
    let response = send(
        test_app(),
        post_json("/api/v1/dosage/quantity", json!({ "frequency_code": "q8h", "duration_days": 5 })),
    )
    .await;

    let body = body_json(response).await;
    assert_eq!(body["quantity"], 15);
    assert_eq!(body["frequency_code"], "Q8H");
}

#[tokio::test]
async fn test_quantity_rounds_up_partial_units() {
    let response = send(
        test_app(),
        post_json("/api/v1/dosage/quantity", json!({ "frequency_code": "WEEKLY", "duration_days": 10 })),
    )
    .await;

    let body = body_json(response).await;
    assert_eq!(body["quantity"], 2);
}

#[tokio::test]
async fn test_unknown_code_falls_back_to_duration() {
    let response = send(
        test_app(),
        post_json("/api/v1/dosage/quantity", json!({ "frequency_code": "XYZ", "duration_days": 9 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["quantity"], 9);
    assert_eq!(body["recognized"], false);
}

#[tokio::test]
async fn test_zero_duration_is_rejected() {
    let response = send(
        test_app(),
        post_json("/api/v1/dosage/quantity", json!({ "frequency_code": "BD", "duration_days": 0 })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_list_frequencies_keeps_table_order() {
    let response = send(test_app(), get("/api/v1/dosage/frequencies")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes.first(), Some(&"OD"));
    assert_eq!(codes.len(), 12);
}
