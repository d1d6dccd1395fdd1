use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::handlers::{self, AppState};
use crate::openapi;

/// Builds the HTTP router.
///
/// `/health` and the documentation routes are public; `/api/upi` checks the
/// API key itself.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/upi", get(handlers::upi_lookup))
        .layer(
            ServiceBuilder::new()
                // The lookup takes no body
                .layer(RequestBodyLimitLayer::new(64 * 1024)),
        );

    Router::new()
        .route("/health", get(handlers::health))
        .route("/docs", get(openapi::serve_swagger_ui))
        .route(openapi::OPENAPI_PATH, get(openapi::openapi_json))
        .merge(api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
