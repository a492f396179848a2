//! Student and enrollment handlers

use crate::api::extract::{parse_id, Payload};
use crate::api::models::{
    EnrollRequest, EnrollResponse, MessageResponse, StudentListResponse, StudentRequest,
};
use crate::error::AppError;
use crate::store::Student;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::info;

/// List all students
#[utoipa::path(
    get,
    path = "/students",
    tag = "Students",
    responses(
        (status = 200, description = "All students in insertion order", body = StudentListResponse)
    )
)]
pub async fn list_students(State(state): State<Arc<AppState>>) -> Json<StudentListResponse> {
    Json(StudentListResponse {
        message: "Registered students.".to_string(),
        students: state.store.list_students(),
    })
}

/// Get a student by id
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = u64, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = Student),
        (status = 404, description = "Student not found", body = MessageResponse)
    )
)]
pub async fn get_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Student>, AppError> {
    let id = parse_id(&id).ok_or_else(AppError::student_not_found)?;
    Ok(Json(state.store.get_student(id)?))
}

/// Register a student
#[utoipa::path(
    post,
    path = "/students",
    tag = "Students",
    request_body = StudentRequest,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Missing fields", body = MessageResponse)
    )
)]
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    payload: Payload<StudentRequest>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let input = payload.into_inner()?.validate()?;
    info!(name = %input.name, "Received student registration request");

    let student = state.store.create_student(input)?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// Replace a student's name and email
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = u64, Path, description = "Student id")),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 400, description = "Missing fields", body = MessageResponse),
        (status = 404, description = "Student not found", body = MessageResponse)
    )
)]
pub async fn update_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Payload<StudentRequest>,
) -> Result<Json<Student>, AppError> {
    let id = parse_id(&id).ok_or_else(AppError::student_not_found)?;
    state.store.ensure_student(id)?;

    let input = payload.into_inner()?.validate()?;
    Ok(Json(state.store.update_student(id, input)?))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = u64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 404, description = "Student not found", body = MessageResponse)
    )
)]
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id).ok_or_else(AppError::student_not_found)?;
    state.store.delete_student(id)?;
    Ok(Json(MessageResponse::new("Student deleted successfully.")))
}

/// Enroll a student in a course
#[utoipa::path(
    post,
    path = "/students/{id}/enroll",
    tag = "Students",
    params(("id" = u64, Path, description = "Student id")),
    request_body = EnrollRequest,
    responses(
        (status = 200, description = "Student enrolled", body = EnrollResponse),
        (status = 400, description = "Malformed body or already enrolled", body = MessageResponse),
        (status = 404, description = "Student or course not found", body = MessageResponse)
    )
)]
pub async fn enroll(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Payload<EnrollRequest>,
) -> Result<Json<EnrollResponse>, AppError> {
    let student_id = parse_id(&id).ok_or_else(AppError::student_not_found)?;
    state.store.ensure_student(student_id)?;

    // A body without an integral courseId cannot reference any course.
    let course_id = payload
        .into_inner()?
        .course_id()
        .ok_or_else(AppError::course_not_found)?;

    info!(student_id, course_id, "Received enrollment request");
    let student = state.store.enroll(student_id, course_id)?;

    Ok(Json(EnrollResponse {
        message: "Student enrolled successfully!".to_string(),
        student,
    }))
}
