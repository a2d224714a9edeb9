use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::domain::{GrievanceTab, NewGrievance};
use super::service::{GrievanceDesk, GrievanceError};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GrievanceQuery {
    #[serde(default)]
    pub(crate) q: String,
    #[serde(default)]
    pub(crate) tab: GrievanceTab,
}

/// Router for the grievance tracker.
pub fn grievance_router(desk: Arc<GrievanceDesk>) -> Router {
    Router::new()
        .route(
            "/api/v1/grievances",
            get(list_handler).post(submit_handler),
        )
        .route("/api/v1/grievances/:grievance_id", get(detail_handler))
        .with_state(desk)
}

pub(crate) async fn list_handler(
    State(desk): State<Arc<GrievanceDesk>>,
    Query(query): Query<GrievanceQuery>,
) -> Response {
    let listing = desk.list(&query.q, query.tab);
    (StatusCode::OK, Json(listing)).into_response()
}

pub(crate) async fn detail_handler(
    State(desk): State<Arc<GrievanceDesk>>,
    Path(grievance_id): Path<String>,
) -> Response {
    match desk.get(&grievance_id) {
        Ok(grievance) => (StatusCode::OK, Json(grievance)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler(
    State(desk): State<Arc<GrievanceDesk>>,
    Json(grievance): Json<NewGrievance>,
) -> Response {
    let today = Local::now().date_naive();
    match desk.submit(grievance, today).await {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: GrievanceError) -> Response {
    let status = match error {
        GrievanceError::InputMissing { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        GrievanceError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
