//! API request and response models

use crate::error::{AppError, Result};
use crate::store::{Course, CourseInput, Student, StudentInput};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

const COURSE_FIELDS_REQUIRED: &str = "Name and hours (number) are required.";
const STUDENT_FIELDS_REQUIRED: &str = "Name and email are required.";

/// Body of `POST /courses` and `PUT /courses/:id`.
///
/// Fields stay raw until [`CourseRequest::validate`] so that wrong types surface
/// as validation errors rather than deserialization failures.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CourseRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,

    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub hours: Option<Value>,
}

impl CourseRequest {
    /// Require a non-empty string name and a non-zero numeric hours value
    pub fn validate(self) -> Result<CourseInput> {
        let name = non_empty_string(self.name);
        let hours = match self.hours {
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n),
            _ => None,
        };

        match (name, hours) {
            (Some(name), Some(hours)) => Ok(CourseInput { name, hours }),
            _ => Err(AppError::Validation(COURSE_FIELDS_REQUIRED.to_string())),
        }
    }
}

/// Body of `POST /students` and `PUT /students/:id`
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct StudentRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
}

impl StudentRequest {
    pub fn validate(self) -> Result<StudentInput> {
        match (non_empty_string(self.name), non_empty_string(self.email)) {
            (Some(name), Some(email)) => Ok(StudentInput { name, email }),
            _ => Err(AppError::Validation(STUDENT_FIELDS_REQUIRED.to_string())),
        }
    }
}

/// Body of `POST /students/:id/enroll`
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    #[serde(default)]
    #[schema(value_type = Option<u64>)]
    pub course_id: Option<Value>,
}

impl EnrollRequest {
    /// The referenced course id, if the body carries an integral JSON number.
    /// `1` and `1.0` name the same course.
    pub fn course_id(&self) -> Option<u64> {
        let number = match self.course_id.as_ref()? {
            Value::Number(n) => n,
            _ => return None,
        };
        if let Some(id) = number.as_u64() {
            return Some(id);
        }
        let value = number.as_f64()?;
        if value >= 1.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
            Some(value as u64)
        } else {
            None
        }
    }
}

fn non_empty_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Course list response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CourseListResponse {
    pub message: String,
    pub courses: Vec<Course>,
}

/// Student list response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct StudentListResponse {
    pub message: String,
    pub students: Vec<Student>,
}

/// Enrollment confirmation
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EnrollResponse {
    pub message: String,
    pub student: Student,
}

/// Generic confirmation or error message
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub courses: usize,
    pub students: usize,
    pub timestamp: String,
}
