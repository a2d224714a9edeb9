use super::common::*;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::portal::test_support::{get_request, json_request, read_json_body};

#[tokio::test]
async fn calculate_route_returns_quote() {
    let response = router()
        .oneshot(json_request(
            "POST",
            "/api/v1/billing/calculate",
            &json!({
                "connection_type": "residential",
                "meter_mode": "meter",
                "previous_reading": "100",
                "current_reading": "150",
                "division": "division1"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["consumed_units"], json!("50"));
    assert_eq!(payload["total_amount"], json!("400"));
    assert_eq!(payload["display_total"], json!("₹400.00"));
    assert_eq!(payload["meter_mode"], json!("metered"));
    assert_eq!(payload["context"]["division"], json!("division1"));
}

#[tokio::test]
async fn calculate_route_rejects_reading_order() {
    let response = router()
        .oneshot(json_request(
            "POST",
            "/api/v1/billing/calculate",
            &json!({
                "connection_type": "industrial",
                "previous_reading": "90",
                "current_reading": "10"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], json!("invalid_reading_order"));
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("cannot be less than previous"));
}

#[tokio::test]
async fn calculate_route_reports_unpriceable_amount() {
    let response = router()
        .oneshot(json_request(
            "POST",
            "/api/v1/billing/calculate",
            &json!({
                "connection_type": "industrial",
                "previous_reading": "0",
                "current_reading": "79228162514264337593543950335"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], json!("amount_out_of_range"));
}

#[tokio::test]
async fn rates_route_lists_both_tables() {
    let response = router()
        .oneshot(get_request("/api/v1/billing/rates"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["metered_per_unit"]["commercial"], json!("15"));
    assert_eq!(payload["non_metered_monthly"]["industrial"], json!("3000"));
}
