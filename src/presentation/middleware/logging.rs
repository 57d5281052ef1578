//! Request Tracing

use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, HttpMakeClassifier, TraceLayer,
};
use tracing::Level;

/// HTTP trace layer: one INFO span per request, response status and latency
/// on completion, server errors at ERROR.
pub fn create_trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}
