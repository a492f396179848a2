//! HTTP route definitions

use crate::api::models::*;
use crate::api::{handlers, student_handlers};
use crate::store::{Course, Student};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course Registry API",
        description = "In-memory course and student registry with enrollment.",
        license(name = "MIT"),
    ),
    paths(
        handlers::list_courses,
        handlers::get_course,
        handlers::create_course,
        handlers::update_course,
        handlers::delete_course,
        handlers::health_check,
        handlers::reset,
        student_handlers::list_students,
        student_handlers::get_student,
        student_handlers::create_student,
        student_handlers::update_student,
        student_handlers::delete_student,
        student_handlers::enroll,
    ),
    components(schemas(
        Course,
        Student,
        CourseRequest,
        StudentRequest,
        EnrollRequest,
        CourseListResponse,
        StudentListResponse,
        EnrollResponse,
        MessageResponse,
        HealthResponse,
    )),
    tags(
        (name = "Courses", description = "Course management"),
        (name = "Students", description = "Student management and enrollment"),
        (name = "Health", description = "Health and monitoring endpoints"),
        (name = "Admin", description = "Test and maintenance operations"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    let api = &state.settings.api;

    let mut router = Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/courses",
            get(handlers::list_courses).post(handlers::create_course),
        )
        .route(
            "/courses/:id",
            get(handlers::get_course)
                .put(handlers::update_course)
                .delete(handlers::delete_course),
        )
        .route(
            "/students",
            get(student_handlers::list_students).post(student_handlers::create_student),
        )
        .route(
            "/students/:id",
            get(student_handlers::get_student)
                .put(student_handlers::update_student)
                .delete(student_handlers::delete_student),
        )
        .route("/students/:id/enroll", post(student_handlers::enroll));

    if api.reset_enabled {
        router = router.route("/admin/reset", post(handlers::reset));
    }

    if api.docs_enabled {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    let router = if api.cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state).layer(TraceLayer::new_for_http())
}
