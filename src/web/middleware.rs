//! HTTP middleware

use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};

/// Header carrying the id of the request span back to the client
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Run each request inside a `request` span
///
/// The span carries a fresh request id and the matched route, so cache hits,
/// rejections and stored uploads logged further down can be tied to the
/// request that caused them. The id is echoed in [`REQUEST_ID_HEADER`].
pub async fn request_span_middleware(request: Request, next: Next) -> Response {
    let request_id = uuid::Uuid::new_v4();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let span = info_span!(
        "request",
        id = %request_id,
        method = %request.method(),
        route = %route,
    );

    let start = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;
    let elapsed_ms = start.elapsed().as_millis();

    let status = response.status();
    span.in_scope(|| {
        if status.is_client_error() || status.is_server_error() {
            warn!(status = status.as_u16(), elapsed_ms, "Request finished with error");
        } else {
            info!(status = status.as_u16(), elapsed_ms, "Request finished");
        }
    });

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
