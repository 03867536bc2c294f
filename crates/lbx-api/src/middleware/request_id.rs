//! Request ID middleware.
//!
//! Tags each incoming request with a unique ID that is propagated through
//! the request span and echoed back in the response headers.

use axum::{extract::Request, http::header::HeaderName, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Header name for the request ID
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Middleware to add a request ID to each request
///
/// If the client provides an X-Request-ID header, it will be preserved.
/// Otherwise, a new UUID will be generated.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(request_id.clone()));

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        uri = %req.uri(),
    );

    let mut response = next.run(req).instrument(span).await;

    if let Ok(header_value) = request_id.parse() {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-request-id"), header_value);
    }

    response
}

/// Request ID wrapper for extraction in handlers
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

impl RequestId {
    /// Get the request ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
