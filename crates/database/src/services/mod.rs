pub mod course;
pub mod schema;
