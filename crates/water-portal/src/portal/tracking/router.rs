use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::catalog::{TrackingCatalog, TrackingError};

pub fn tracking_router(catalog: Arc<TrackingCatalog>) -> Router {
    Router::new()
        .route("/api/v1/tracking/:tracking_id", get(track_handler))
        .with_state(catalog)
}

pub(crate) async fn track_handler(
    State(catalog): State<Arc<TrackingCatalog>>,
    Path(tracking_id): Path<String>,
) -> Response {
    match catalog.track(&tracking_id) {
        Ok(record) => {
            tracing::debug!(tracking_id = %record.tracking_id, "tracking record served");
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(error) => {
            let status = match error {
                TrackingError::InputMissing => StatusCode::UNPROCESSABLE_ENTITY,
                TrackingError::NotFound(_) => StatusCode::NOT_FOUND,
            };
            (status, Json(json!({ "error": error.to_string() }))).into_response()
        }
    }
}
