use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::calculator::{BillCalculator, BillRequest, BillingError};

/// Router exposing the rate table and the calculator.
pub fn billing_router(calculator: Arc<BillCalculator>) -> Router {
    Router::new()
        .route("/api/v1/billing/rates", get(rates_handler))
        .route("/api/v1/billing/calculate", post(calculate_handler))
        .with_state(calculator)
}

pub(crate) async fn rates_handler(State(calculator): State<Arc<BillCalculator>>) -> Response {
    (StatusCode::OK, Json(calculator.schedule().clone())).into_response()
}

pub(crate) async fn calculate_handler(
    State(calculator): State<Arc<BillCalculator>>,
    Json(request): Json<BillRequest>,
) -> Response {
    match calculator.quote(&request) {
        Ok(quote) => (StatusCode::OK, Json(quote)).into_response(),
        Err(error) => {
            let kind = match &error {
                BillingError::InputMissing { .. } => "input_missing",
                BillingError::InvalidNumber { .. } => "invalid_number",
                BillingError::UnknownOption { .. } => "unknown_option",
                BillingError::InvalidReadingOrder(_) => "invalid_reading_order",
                BillingError::AmountOutOfRange { .. } => "amount_out_of_range",
            };
            let payload = json!({
                "error": error.to_string(),
                "kind": kind,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
