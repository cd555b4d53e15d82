use std::sync::Arc;

use axum::Router;
use state::AppState;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod routes;
pub mod state;

/// Build the full application router around the shared state
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .fallback(routes::fallback)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
