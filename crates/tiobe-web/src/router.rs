//! Axum router — maps all URL paths to handlers.

use axum::{
    body::Body,
    http::Request,
    routing::get,
    Router,
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing::{info_span, Span};
use crate::state::SharedState;
use crate::handlers::{
    languages::{list_languages, get_language},
    system::{health, api_not_found},
};
use crate::openapi::swagger_ui;

/// Header the reverse proxy sets to the client address.
pub const REAL_IP_HEADER: &str = "x-real-ip";

/// Build and return the full Axum router.
pub fn build_router(state: SharedState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        // API endpoints
        .route("/api/languages",         get(list_languages))
        .route("/api/language/{name}",   get(get_language))
        .route("/health",                get(health))
        .route("/api/{*rest}",           get(api_not_found))

        // /swagger-ui and /api-docs/openapi.json
        .merge(swagger_ui())

        // Everything else is served from the static directory
        .fallback_service(ServeDir::new(static_dir))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .with_state(state)
}

/// Span for one request, tagged with the proxied client address (`-` when absent).
pub fn request_span(request: &Request<Body>) -> Span {
    let real_ip = request
        .headers()
        .get(REAL_IP_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        real_ip = %real_ip,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{Layer, Registry};

    type Fields = Arc<Mutex<HashMap<String, String>>>;

    /// Records the fields of every span opened while it is installed.
    struct SpanFields(Fields);

    impl Visit for SpanFields {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0
                .lock()
                .unwrap()
                .insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    struct CaptureLayer(Fields);

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            attrs.record(&mut SpanFields(Arc::clone(&self.0)));
        }
    }

    fn span_fields(request: Request<Body>) -> HashMap<String, String> {
        let fields = Fields::default();
        let subscriber = Registry::default().with(CaptureLayer(Arc::clone(&fields)));
        tracing::subscriber::with_default(subscriber, || {
            let _span = request_span(&request);
        });
        let captured = fields.lock().unwrap().clone();
        captured
    }

    #[test]
    fn test_span_records_real_ip() {
        let request = Request::builder()
            .uri("/api/languages?year=2024&month=1")
            .header(REAL_IP_HEADER, "203.0.113.7")
            .body(Body::empty())
            .unwrap();

        let fields = span_fields(request);
        assert_eq!(fields["real_ip"], "203.0.113.7");
        assert_eq!(fields["method"], "GET");
        assert_eq!(fields["uri"], "/api/languages?year=2024&month=1");
    }

    #[test]
    fn test_span_without_proxy_header() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        assert_eq!(span_fields(request)["real_ip"], "-");
    }
}
