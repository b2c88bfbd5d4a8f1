//! Request spans
//!
//! Every request handled by the item routes runs inside a span whose
//! `resource` field is `"{METHOD} {path}"`. Handlers never open spans
//! themselves.

use axum::http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Span factory for inbound requests
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "http_request",
            resource = %resource_name(request),
            method = %request.method(),
            path = %request.uri().path()
        )
    }
}

/// `"GET /items/1"`
pub fn resource_name<B>(request: &Request<B>) -> String {
    format!("{} {}", request.method(), request.uri().path())
}

/// Tracing middleware wrapping each request.
///
/// 5xx responses are recorded as failures at error level.
pub fn request_trace_layer(
) -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan, DefaultOnRequest, DefaultOnResponse>
{
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name_excludes_query() {
        let request = Request::builder()
            .method("PUT")
            .uri("/items/7?verbose=1")
            .body(())
            .unwrap();

        assert_eq!(resource_name(&request), "PUT /items/7");
    }
}
