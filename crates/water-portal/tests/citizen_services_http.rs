//! HTTP scenarios across the citizen routers, merged the way the API binary serves them.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use water_portal::portal::applications::{application_router, ApplicationIntake};
use water_portal::portal::billing::{billing_router, BillCalculator};
use water_portal::portal::directory::{
    directory_router, PropertyLookupService, StaticPropertyDirectory,
};
use water_portal::portal::simulation::SeededRandom;

fn router() -> axum::Router {
    let directory = Arc::new(StaticPropertyDirectory::built_in(Duration::ZERO));
    let intake = ApplicationIntake::new(Arc::new(SeededRandom::new(42)), Duration::ZERO);

    billing_router(Arc::new(BillCalculator::default()))
        .merge(directory_router(Arc::new(PropertyLookupService::new(directory))))
        .merge(application_router(Arc::new(intake)))
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn lookup_then_apply_with_autofilled_property() {
    let response = router()
        .oneshot(post(
            "/api/v1/properties/search",
            json!({ "query": "c002" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let found = json_body(response).await;
    assert_eq!(found["found"], json!(true));
    let property = &found["property"];

    let application = json!({
        "property": {
            "zone": property["zone"],
            "ward": property["ward"],
            "owner_name": property["owner_name"],
            "mobile": property["mobile_number"],
            "address": property["address"],
            "autofilled": true
        },
        "connection_category": "Commercial",
        "connection_type": "Meter",
        "connection_size": "20mm",
        "declaration_accepted": true
    });
    let response = router()
        .oneshot(post("/api/v1/connections/applications", application))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let receipt = json_body(response).await;
    assert_eq!(receipt["zone"], json!("B"));
    assert!(receipt["application_number"]
        .as_str()
        .unwrap_or_default()
        .starts_with("APP-2025-"));
}

#[tokio::test]
async fn calculator_rejects_reversed_readings() {
    let response = router()
        .oneshot(post(
            "/api/v1/billing/calculate",
            json!({
                "connection_type": "residential",
                "meter_mode": "meter",
                "previous_reading": "150",
                "current_reading": "100"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Current reading cannot be less than previous reading!"));
}

#[tokio::test]
async fn application_without_declaration_is_unprocessable() {
    let response = router()
        .oneshot(post(
            "/api/v1/connections/applications",
            json!({
                "property": {
                    "zone": "D",
                    "ward": "11",
                    "owner_name": "Kiran Rao",
                    "mobile": "9000000002",
                    "address": "4, Hill Road"
                },
                "connection_category": "industrial",
                "connection_type": "non-meter",
                "connection_size": "50mm"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = json_body(response).await;
    assert_eq!(payload["kind"], json!("declaration_required"));
}
