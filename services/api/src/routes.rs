use crate::infra::{AppState, PortalServices};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use water_portal::portal::applications::application_router;
use water_portal::portal::assistant::assistant_router;
use water_portal::portal::billing::billing_router;
use water_portal::portal::directory::directory_router;
use water_portal::portal::grievances::grievance_router;
use water_portal::portal::readings::readings_router;
use water_portal::portal::tracking::tracking_router;

pub(crate) fn with_portal_routes(services: &PortalServices) -> axum::Router {
    billing_router(services.billing.clone())
        .merge(directory_router(services.lookup.clone()))
        .merge(tracking_router(services.tracking.clone()))
        .merge(grievance_router(services.grievances.clone()))
        .merge(application_router(services.applications.clone()))
        .merge(readings_router(services.readings.clone()))
        .merge(assistant_router(services.assistant.clone()))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;
    use water_portal::config::SimulationConfig;
    use water_portal::portal::simulation::SeededRandom;

    fn app(ready: bool) -> axum::Router {
        let services =
            PortalServices::with_random(&SimulationConfig::instant(), Arc::new(SeededRandom::new(1)))
                .expect("services build");
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_portal_routes(&services).layer(Extension(state))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request")
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = app(false).oneshot(get("/ready")).await.expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app(true).oneshot(get("/ready")).await.expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn merged_app_serves_every_portal_area() {
        for uri in [
            "/health",
            "/api/v1/billing/rates",
            "/api/v1/tracking/APP-2025-002",
            "/api/v1/grievances",
            "/api/v1/readings/consumer",
            "/api/v1/assistant/greeting",
        ] {
            let response = app(true).oneshot(get(uri)).await.expect("route executes");
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn tracking_unknown_prefix_is_not_found() {
        let response = app(true)
            .oneshot(get("/api/v1/tracking/XYZ-001"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let payload = body_json(response).await;
        assert!(payload["error"].is_string());
    }

    #[tokio::test]
    async fn billing_calculation_through_the_app() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/billing/calculate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "connection_type": "industrial",
                    "meter_mode": "non-meter"
                })
                .to_string(),
            ))
            .expect("valid request");

        let response = app(true).oneshot(request).await.expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(payload["total_amount"], json!("3000"));
        assert_eq!(payload["consumed_units"], json!("0"));
    }
}
