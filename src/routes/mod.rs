//! Router assembly.

mod books;
mod common;

pub use books::book_routes;
pub use common::common_routes;

use crate::config::HttpConfig;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: common routes at the root, book routes under `/api`.
pub fn app(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", book_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(http.body_limit_bytes)),
        )
}
