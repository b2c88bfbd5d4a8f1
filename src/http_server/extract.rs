//! Request extractors for the item routes.
//!
//! Both reject with [`ApiError`] so every failure shares one response format.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::errors::ApiError;
use crate::store::ItemId;

/// Integer id taken from the `:id` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemIdPath(pub ItemId);

#[async_trait]
impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId)?;

        raw.parse::<ItemId>()
            .map(ItemIdPath)
            .map_err(|_| ApiError::InvalidId)
    }
}

/// JSON request body.
///
/// Unlike `axum::Json` this ignores the `Content-Type` header and reports
/// every decode failure as a 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::{get, post};
    use axum::Router;
    use tower::ServiceExt;

    use crate::store::ItemPayload;

    async fn echo_id(ItemIdPath(id): ItemIdPath) -> String {
        id.to_string()
    }

    async fn echo_name(JsonBody(payload): JsonBody<ItemPayload>) -> String {
        payload.name
    }

    async fn send(app: Router, request: Request<Body>) -> (u16, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status().as_u16();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_item_id_parses_signed_integers() {
        let app = Router::new().route("/items/:id", get(echo_id));

        let request = Request::builder().uri("/items/-3").body(Body::empty()).unwrap();
        assert_eq!(send(app, request).await, (200, "-3".to_string()));
    }

    #[tokio::test]
    async fn test_item_id_rejects_non_integers() {
        for raw in ["abc", "1.5", "99999999999"] {
            let app = Router::new().route("/items/:id", get(echo_id));
            let request = Request::builder()
                .uri(format!("/items/{}", raw))
                .body(Body::empty())
                .unwrap();

            assert_eq!(send(app, request).await, (400, "Invalid item ID".to_string()));
        }
    }

    #[tokio::test]
    async fn test_json_body_without_content_type() {
        let app = Router::new().route("/items", post(echo_name));
        let request = Request::builder()
            .method("POST")
            .uri("/items")
            .body(Body::from(r#"{"name":"Widget","description":"A widget","price":1}"#))
            .unwrap();

        assert_eq!(send(app, request).await, (200, "Widget".to_string()));
    }

    #[tokio::test]
    async fn test_json_body_reports_decode_error() {
        let app = Router::new().route("/items", post(echo_name));
        let request = Request::builder()
            .method("POST")
            .uri("/items")
            .body(Body::from("{\"name\":"))
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, 400);
        assert!(body.contains("EOF"));
    }
}
