use database::services::course::CourseRepository;

/// Shared by every handler. Cloning is cheap: the repository wraps a pool handle.
#[derive(Clone, Debug)]
pub struct AppState {
    pub courses: CourseRepository,
    pub project_id: String,
}

impl AppState {
    pub fn new(courses: CourseRepository, project_id: impl Into<String>) -> Self {
        Self {
            courses,
            project_id: project_id.into(),
        }
    }
}
