pub mod course;
pub mod health;
pub mod root;

use crate::{doc, state::AppState};
use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

/// Builds the application router. Each route accepts only its own verb;
/// any other verb on a known path is answered with 405. The id is whatever
/// follows `/delete/` or `/search/`, including nothing at all.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(doc::openapi))
        .route("/list", get(course::list_courses))
        .route("/insert", post(course::insert_course))
        .route("/delete/", delete(course::delete_empty_id))
        .route("/delete/{*course_id}", delete(course::delete_course))
        .route("/search/", get(course::search_empty_id))
        .route("/search/{*course_id}", get(course::search_course))
        .fallback(root::fallback)
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
