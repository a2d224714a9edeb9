use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::reader::MeterReader;
use super::service::{MeterReadingDesk, ReadingError, ReadingSubmission};
use crate::portal::uploads::{UploadDescriptor, UploadRejection};

/// Router for the reading form: consumer card, history, photo reading, and submission.
pub fn readings_router<M>(desk: Arc<MeterReadingDesk<M>>) -> Router
where
    M: MeterReader + 'static,
{
    Router::new()
        .route("/api/v1/readings/consumer", get(consumer_handler::<M>))
        .route("/api/v1/readings/history", get(history_handler::<M>))
        .route("/api/v1/readings/photo", post(photo_handler::<M>))
        .route("/api/v1/readings", post(submit_handler::<M>))
        .with_state(desk)
}

pub(crate) async fn consumer_handler<M>(State(desk): State<Arc<MeterReadingDesk<M>>>) -> Response
where
    M: MeterReader + 'static,
{
    let payload = json!({
        "profile": desk.profile(),
        "quarter": desk.quarter(),
        "previous_reading": desk.previous_reading(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn history_handler<M>(State(desk): State<Arc<MeterReadingDesk<M>>>) -> Response
where
    M: MeterReader + 'static,
{
    (StatusCode::OK, Json(desk.history().to_vec())).into_response()
}

pub(crate) async fn photo_handler<M>(
    State(desk): State<Arc<MeterReadingDesk<M>>>,
    Json(photo): Json<UploadDescriptor>,
) -> Response
where
    M: MeterReader + 'static,
{
    match desk.read_photo(&photo).await {
        Ok(detected) => (StatusCode::OK, Json(detected)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<M>(
    State(desk): State<Arc<MeterReadingDesk<M>>>,
    Json(submission): Json<ReadingSubmission>,
) -> Response
where
    M: MeterReader + 'static,
{
    match desk.submit(&submission) {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ReadingError) -> Response {
    let (status, kind) = match &error {
        ReadingError::InputMissing { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "input_missing"),
        ReadingError::InvalidNumber { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_number"),
        ReadingError::InvalidReadingOrder(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "invalid_reading_order")
        }
        ReadingError::Upload(UploadRejection::FileTooLarge { .. }) => {
            (StatusCode::PAYLOAD_TOO_LARGE, "file_too_large")
        }
        ReadingError::Upload(UploadRejection::FileWrongType { .. }) => {
            (StatusCode::UNSUPPORTED_MEDIA_TYPE, "file_wrong_type")
        }
    };
    let payload = json!({
        "error": error.to_string(),
        "kind": kind,
    });
    (status, Json(payload)).into_response()
}
