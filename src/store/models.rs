//! Record types held by the registry

use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

/// A course students can enroll into
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct Course {
    pub id: u64,
    pub name: String,
    /// Course workload, kept in the numeric form the client sent
    #[schema(value_type = f64)]
    pub hours: Number,
}

/// A student and the ids of the courses they are enrolled in
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Enrollment order, no duplicates
    pub enrolled_course_ids: Vec<u64>,
}

impl Student {
    pub fn is_enrolled(&self, course_id: u64) -> bool {
        self.enrolled_course_ids.contains(&course_id)
    }
}

/// Validated fields for creating or updating a course
#[derive(Debug, Clone, PartialEq)]
pub struct CourseInput {
    pub name: String,
    pub hours: Number,
}

/// Validated fields for creating or updating a student
#[derive(Debug, Clone, PartialEq)]
pub struct StudentInput {
    pub name: String,
    pub email: String,
}
