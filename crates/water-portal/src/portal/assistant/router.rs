use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::dispatcher::ChatAssistant;

#[derive(Debug, Deserialize)]
pub(crate) struct ChatMessageRequest {
    #[serde(default)]
    pub(crate) text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OptionRequest {
    #[serde(default)]
    pub(crate) option: String,
}

pub fn assistant_router(assistant: Arc<ChatAssistant>) -> Router {
    Router::new()
        .route("/api/v1/assistant/greeting", get(greeting_handler))
        .route("/api/v1/assistant/messages", post(message_handler))
        .route("/api/v1/assistant/options", post(option_handler))
        .with_state(assistant)
}

pub(crate) async fn greeting_handler(State(assistant): State<Arc<ChatAssistant>>) -> Response {
    (StatusCode::OK, Json(assistant.greeting())).into_response()
}

pub(crate) async fn message_handler(
    State(assistant): State<Arc<ChatAssistant>>,
    Json(request): Json<ChatMessageRequest>,
) -> Response {
    match assistant.send(&request.text).await {
        Some(reply) => (StatusCode::OK, Json(reply)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub(crate) async fn option_handler(
    State(assistant): State<Arc<ChatAssistant>>,
    Json(request): Json<OptionRequest>,
) -> Response {
    if request.option.trim().is_empty() {
        let payload = json!({ "error": "option is required" });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }
    let reply = assistant.choose(&request.option).await;
    (StatusCode::OK, Json(reply)).into_response()
}
