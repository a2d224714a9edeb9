use std::sync::Arc;

use crate::portal::billing::{billing_router, BillCalculator, BillRequest};

pub(super) fn metered_request(connection_type: &str, previous: &str, current: &str) -> BillRequest {
    BillRequest {
        connection_type: Some(connection_type.to_string()),
        meter_mode: Some("meter".to_string()),
        previous_reading: Some(previous.to_string()),
        current_reading: Some(current.to_string()),
        ..BillRequest::default()
    }
}

pub(super) fn non_metered_request(connection_type: &str) -> BillRequest {
    BillRequest {
        connection_type: Some(connection_type.to_string()),
        meter_mode: Some("non-meter".to_string()),
        ..BillRequest::default()
    }
}

pub(super) fn calculator() -> Arc<BillCalculator> {
    Arc::new(BillCalculator::default())
}

pub(super) fn router() -> axum::Router {
    billing_router(calculator())
}
