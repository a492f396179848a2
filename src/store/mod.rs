//! In-memory record store for courses, students and enrollments

pub mod models;
pub mod registry;

pub use models::{Course, CourseInput, Student, StudentInput};
pub use registry::{Registry, RegistryCounts};
