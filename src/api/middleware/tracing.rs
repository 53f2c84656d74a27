//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request carrying the method, URI, and HTTP
/// version, and logs the status code with millisecond latency on response.
/// Inbound URIs are safe to record in full: the OMDb API key only appears
/// on outbound upstream URLs, never on routes served here.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/api/movies/search?title=batman version=HTTP/1.1}: Processing request
/// INFO request{method=GET uri=/api/movies/search?title=batman version=HTTP/1.1}: Response 200 OK in 12ms
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
