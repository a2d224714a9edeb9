use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::domain::ConnectionApplication;
use super::intake::{ApplicationError, ApplicationIntake};
use crate::portal::uploads::UploadRejection;

/// Router for new connection applications.
pub fn application_router(intake: Arc<ApplicationIntake>) -> Router {
    Router::new()
        .route("/api/v1/connections/applications", post(submit_handler))
        .with_state(intake)
}

pub(crate) async fn submit_handler(
    State(intake): State<Arc<ApplicationIntake>>,
    Json(application): Json<ConnectionApplication>,
) -> Response {
    match intake.submit(application).await {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(error) => {
            let (status, kind) = match &error {
                ApplicationError::InputMissing { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "input_missing")
                }
                ApplicationError::UnknownOption { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "unknown_option")
                }
                ApplicationError::WardOutsideZone { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "ward_outside_zone")
                }
                ApplicationError::DeclarationRequired => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "declaration_required")
                }
                ApplicationError::Upload(UploadRejection::FileTooLarge { .. }) => {
                    (StatusCode::PAYLOAD_TOO_LARGE, "file_too_large")
                }
                ApplicationError::Upload(UploadRejection::FileWrongType { .. }) => {
                    (StatusCode::UNSUPPORTED_MEDIA_TYPE, "file_wrong_type")
                }
            };
            let payload = json!({
                "error": error.to_string(),
                "kind": kind,
            });
            (status, Json(payload)).into_response()
        }
    }
}
