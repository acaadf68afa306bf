use crate::{dtos::course::CourseRecord, state::AppState};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use database::error::CourseError;
use log::{debug, error, info, warn};

type PlainError = (StatusCode, &'static str);

/// List every course in the catalog
#[utoipa::path(
    get,
    path = "/list",
    responses(
        (status = 200, description = "All courses", body = Vec<CourseRecord>),
        (status = 500, description = "Database failure", content_type = "text/plain", body = String)
    ),
    tag = "Courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseRecord>>, PlainError> {
    let courses = state.courses.list().await.map_err(|err| {
        error!("Failed to list courses: {err}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve courses")
    })?;

    Ok(Json(courses.into_iter().map(CourseRecord::from).collect()))
}

/// Add a course to the catalog
#[utoipa::path(
    post,
    path = "/insert",
    request_body = CourseRecord,
    responses(
        (status = 200, description = "Course inserted", content_type = "text/plain", body = String),
        (status = 400, description = "Body is not a course", content_type = "text/plain", body = String),
        (status = 500, description = "Insert rejected by the database", content_type = "text/plain", body = String)
    ),
    tag = "Courses"
)]
pub async fn insert_course(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), PlainError> {
    // Decoded by hand so a wrong or missing content-type is still a 400
    let record: CourseRecord = serde_json::from_slice(&body).map_err(|err| {
        warn!("Rejected insert body: {err}");
        (StatusCode::BAD_REQUEST, "Invalid request body")
    })?;

    let course_id = record.course_id.clone();
    state.courses.insert(record.into()).await.map_err(|err| {
        error!("Failed to insert course {course_id}: {err}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Insert failed")
    })?;

    info!("Inserted course {course_id}");
    Ok((StatusCode::OK, "Course inserted"))
}

/// Remove a course. Unknown ids succeed.
#[utoipa::path(
    delete,
    path = "/delete/{course_id}",
    params(
        ("course_id" = String, Path, description = "Everything after /delete/")
    ),
    responses(
        (status = 200, description = "Course deleted", content_type = "text/plain", body = String),
        (status = 500, description = "Database failure", content_type = "text/plain", body = String)
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<(StatusCode, &'static str), PlainError> {
    let removed = state.courses.delete(&course_id).await.map_err(|err| {
        error!("Failed to delete course {course_id}: {err}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Delete failed")
    })?;

    info!("Deleted course {course_id} ({removed} row(s))");
    Ok((StatusCode::OK, "Course deleted"))
}

/// `/delete/` with nothing after the prefix targets the empty id
pub async fn delete_empty_id(
    state: State<AppState>,
) -> Result<(StatusCode, &'static str), PlainError> {
    delete_course(state, Path(String::new())).await
}

/// Look up a single course by id
#[utoipa::path(
    get,
    path = "/search/{course_id}",
    params(
        ("course_id" = String, Path, description = "Everything after /search/")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseRecord),
        (status = 404, description = "Course not found", content_type = "text/plain", body = String),
        (status = 500, description = "Database failure", content_type = "text/plain", body = String)
    ),
    tag = "Courses"
)]
pub async fn search_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseRecord>, PlainError> {
    match state.courses.search(&course_id).await {
        Ok(course) => Ok(Json(course.into())),
        Err(CourseError::NotFound(_)) => {
            debug!("No course with id {course_id}");
            Err((StatusCode::NOT_FOUND, "Course not found"))
        }
        Err(err) => {
            error!("Failed to search for course {course_id}: {err}");
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve course"))
        }
    }
}

/// `/search/` with nothing after the prefix looks up the empty id
pub async fn search_empty_id(
    state: State<AppState>,
) -> Result<Json<CourseRecord>, PlainError> {
    search_course(state, Path(String::new())).await
}
