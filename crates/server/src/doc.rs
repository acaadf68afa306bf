use crate::routes::{course, health, root};
use axum::Json;
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        course::list_courses,
        course::insert_course,
        course::delete_course,
        course::search_course
    ),
    tags(
        (name = "Courses", description = "Course catalog endpoints"),
        (name = "Health", description = "Liveness checks"),
    ),
    info(
        title = "Course Catalog API",
        version = "1.0.0",
        description = "MSDS course catalog",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
