//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Spans are opened at `INFO` with method, URI and version; responses are
/// logged at `INFO` with status and latency in milliseconds. Cache HIT/MISS
/// events from the lookup services are emitted inside this span.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/player/faker/kr1 version=HTTP/1.1}: started processing request
/// DEBUG request{method=GET uri=/player/faker/kr1 version=HTTP/1.1}: Cache MISS key="riot:account:faker:kr1"
/// INFO request{method=GET uri=/player/faker/kr1 version=HTTP/1.1}: finished processing request latency=212 ms status=200
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
