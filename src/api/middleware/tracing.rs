//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

/// Trace layer type returned by [`layer`].
pub type GateTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    fn(&Request<Body>) -> Span,
    DefaultOnRequest,
    DefaultOnResponse,
>;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Creates a span at `INFO` level with method, path and HTTP version.
///   The query string is left out: gate requests carry the full outbound URL there.
///
/// **On Response:**
/// - Logs at `INFO` level with status code and latency in milliseconds
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET path=/fundgrube/redirect version=HTTP/1.1}: finished processing request latency=1 ms status=200
/// INFO request{method=GET path=/api/share version=HTTP/1.1}: finished processing request latency=0 ms status=400
/// ```
pub fn layer() -> GateTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as fn(&Request<Body>) -> Span)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        version = ?request.version(),
    )
}
