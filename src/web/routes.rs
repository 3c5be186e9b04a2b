use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::core::storage::repository::NewsRepository;
use crate::core::AppServices;
use crate::web::handlers;

#[derive(Clone)]
pub struct AppState {
    pub repository: NewsRepository,
    pub client: reqwest::Client,
    pub services: AppServices,
}

/// Every content route accepts GET and POST: parameters arrive either in
/// the query string or as an urlencoded form body, whichever the caller
/// prefers.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/search", get(handlers::search).post(handlers::search))
        .route(
            "/run",
            get(handlers::run_ingestion).post(handlers::run_ingestion),
        )
        .route("/drop", get(handlers::drop_all).post(handlers::drop_all))
        .route("/health", get(handlers::health))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
