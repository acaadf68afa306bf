use database::entities::courses;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape of a course. `courseI_D` is spelled the way existing clients expect.
/// Missing fields decode as empty strings and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CourseRecord {
    #[serde(rename = "courseI_D")]
    #[schema(example = "MSDS410")]
    pub course_id: String,
    #[schema(example = "Data Mining")]
    pub course_name: String,
    #[schema(example = "MSDS460")]
    pub prerequisite: String,
}

impl From<courses::Model> for CourseRecord {
    fn from(course: courses::Model) -> Self {
        Self {
            course_id: course.course_id,
            course_name: course.course_name,
            prerequisite: course.prerequisite,
        }
    }
}

impl From<CourseRecord> for courses::Model {
    fn from(record: CourseRecord) -> Self {
        Self {
            course_id: record.course_id,
            course_name: record.course_name,
            prerequisite: record.prerequisite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_wire_field_names() {
        let record = CourseRecord {
            course_id: "MSDS400".to_string(),
            course_name: "Math for Modelers".to_string(),
            prerequisite: "None".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "courseI_D": "MSDS400",
                "course_name": "Math for Modelers",
                "prerequisite": "None",
            })
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let record: CourseRecord =
            serde_json::from_str(r#"{"courseI_D":"MSDS499","extra":true}"#).unwrap();

        assert_eq!(record.course_id, "MSDS499");
        assert_eq!(record.course_name, "");
        assert_eq!(record.prerequisite, "");
    }
}
