use crate::state::AppState;
use axum::{
    extract::State,
    http::{Method, StatusCode},
};

/// Greets with the name of the deployed project
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", content_type = "text/plain", body = String)
    ),
    tag = "Root"
)]
pub async fn root(State(state): State<AppState>) -> (StatusCode, String) {
    (
        StatusCode::OK,
        format!("microservices have started for {}!\n", state.project_id),
    )
}

/// Unmatched GET requests get the greeting, anything else is a 404
pub async fn fallback(method: Method, state: State<AppState>) -> (StatusCode, String) {
    if method == Method::GET {
        root(state).await
    } else {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    }
}
