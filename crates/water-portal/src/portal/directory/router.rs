use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::repository::PropertyDirectory;
use super::service::{LookupError, PropertyLookupService};

#[derive(Debug, Deserialize)]
pub(crate) struct PropertySearchRequest {
    #[serde(default)]
    pub(crate) query: String,
}

/// Router exposing the property search that pre-fills connection forms.
pub fn directory_router<D>(service: Arc<PropertyLookupService<D>>) -> Router
where
    D: PropertyDirectory + 'static,
{
    Router::new()
        .route("/api/v1/properties/search", post(search_handler::<D>))
        .with_state(service)
}

pub(crate) async fn search_handler<D>(
    State(service): State<Arc<PropertyLookupService<D>>>,
    Json(request): Json<PropertySearchRequest>,
) -> Response
where
    D: PropertyDirectory + 'static,
{
    match service.autofill(&request.query).await {
        Ok(autofill) => {
            let payload = json!({
                "found": true,
                "property": autofill.property,
                "locked_fields": autofill.locked_fields,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        // A miss is informational: the form stays open for manual entry.
        Err(error @ LookupError::NotFound { .. }) => {
            let payload = json!({
                "found": false,
                "message": error.to_string(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error @ LookupError::InputMissing) => {
            let payload = json!({
                "error": error.to_string(),
                "kind": "input_missing",
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::directory::StaticPropertyDirectory;
    use crate::portal::test_support::{json_request, read_json_body};
    use std::time::Duration;
    use tower::ServiceExt;

    fn router() -> Router {
        let directory = Arc::new(StaticPropertyDirectory::built_in(Duration::ZERO));
        directory_router(Arc::new(PropertyLookupService::new(directory)))
    }

    #[tokio::test]
    async fn search_returns_autofill_payload() {
        let response = router()
            .oneshot(json_request(
                "POST",
                "/api/v1/properties/search",
                &json!({ "query": "p12345" }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["found"], json!(true));
        assert_eq!(payload["property"]["society_name"], json!("Sunshine Apartments"));
        assert_eq!(payload["locked_fields"], json!(["zone", "ward"]));
    }

    #[tokio::test]
    async fn search_miss_allows_manual_entry() {
        let response = router()
            .oneshot(json_request(
                "POST",
                "/api/v1/properties/search",
                &json!({ "query": "UPIC-404" }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["found"], json!(false));
        assert!(payload["message"]
            .as_str()
            .unwrap_or_default()
            .contains("enter details manually"));
    }

    #[tokio::test]
    async fn blank_search_is_unprocessable() {
        let response = router()
            .oneshot(json_request(
                "POST",
                "/api/v1/properties/search",
                &json!({ "query": "" }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
