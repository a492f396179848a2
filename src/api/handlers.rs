//! HTTP request handlers for courses and service endpoints

use crate::api::extract::{parse_id, Payload};
use crate::api::models::{CourseListResponse, CourseRequest, HealthResponse, MessageResponse};
use crate::error::AppError;
use crate::store::Course;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// List all courses
#[utoipa::path(
    get,
    path = "/courses",
    tag = "Courses",
    responses(
        (status = 200, description = "All courses in insertion order", body = CourseListResponse)
    )
)]
pub async fn list_courses(State(state): State<Arc<AppState>>) -> Json<CourseListResponse> {
    Json(CourseListResponse {
        message: "Registered courses.".to_string(),
        courses: state.store.list_courses(),
    })
}

/// Get a course by id
#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = "Courses",
    params(("id" = u64, Path, description = "Course id")),
    responses(
        (status = 200, description = "The course", body = Course),
        (status = 404, description = "Course not found", body = MessageResponse)
    )
)]
pub async fn get_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Course>, AppError> {
    let id = parse_id(&id).ok_or_else(AppError::course_not_found)?;
    Ok(Json(state.store.get_course(id)?))
}

/// Create a course
#[utoipa::path(
    post,
    path = "/courses",
    tag = "Courses",
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Missing or invalid fields", body = MessageResponse),
        (status = 409, description = "A course with this name already exists", body = MessageResponse)
    )
)]
pub async fn create_course(
    State(state): State<Arc<AppState>>,
    payload: Payload<CourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let input = payload.into_inner()?.validate()?;
    info!(name = %input.name, "Received course creation request");

    let course = state.store.create_course(input)?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// Replace a course's name and hours
#[utoipa::path(
    put,
    path = "/courses/{id}",
    tag = "Courses",
    params(("id" = u64, Path, description = "Course id")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 400, description = "Missing or invalid fields", body = MessageResponse),
        (status = 404, description = "Course not found", body = MessageResponse)
    )
)]
pub async fn update_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Payload<CourseRequest>,
) -> Result<Json<Course>, AppError> {
    let id = parse_id(&id).ok_or_else(AppError::course_not_found)?;
    state.store.ensure_course(id)?;

    let input = payload.into_inner()?.validate()?;
    Ok(Json(state.store.update_course(id, input)?))
}

/// Delete a course
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    tag = "Courses",
    params(("id" = u64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 404, description = "Course not found", body = MessageResponse)
    )
)]
pub async fn delete_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id).ok_or_else(AppError::course_not_found)?;
    state.store.delete_course(id)?;
    Ok(Json(MessageResponse::new("Course deleted successfully.")))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let counts = state.store.counts();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        courses: counts.courses,
        students: counts.students,
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Clear all records and restart id counters
#[utoipa::path(
    post,
    path = "/admin/reset",
    tag = "Admin",
    responses((status = 200, description = "State cleared", body = MessageResponse))
)]
pub async fn reset(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    state.store.reset();
    Json(MessageResponse::new("Registry reset."))
}
