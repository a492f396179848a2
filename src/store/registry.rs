//! Registry holding both collections and their id counters

use parking_lot::Mutex;
use std::collections::BTreeMap;
use tracing::info;

use crate::error::{AppError, Result};
use crate::store::models::{Course, CourseInput, Student, StudentInput};

/// Number of records currently held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryCounts {
    pub courses: usize,
    pub students: usize,
}

/// Owned store for courses and students.
///
/// Ids come from counters that only move forward, so iterating the id-keyed maps
/// yields records in insertion order. All state sits behind a single lock; every
/// operation observes and leaves a consistent view of both collections.
pub struct Registry {
    state: Mutex<RegistryState>,
}

struct RegistryState {
    courses: BTreeMap<u64, Course>,
    students: BTreeMap<u64, Student>,
    next_course_id: u64,
    next_student_id: u64,
}

impl RegistryState {
    fn empty() -> Self {
        Self {
            courses: BTreeMap::new(),
            students: BTreeMap::new(),
            next_course_id: 1,
            next_student_id: 1,
        }
    }

    fn name_taken(&self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.courses
            .values()
            .any(|course| course.name.to_lowercase() == wanted)
    }
}

impl Registry {
    /// Create an empty registry with both counters at 1
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RegistryState::empty()),
        }
    }

    /// Clear both collections and restart both counters at 1
    pub fn reset(&self) {
        *self.state.lock() = RegistryState::empty();
        info!("Registry reset");
    }

    pub fn counts(&self) -> RegistryCounts {
        let state = self.state.lock();
        RegistryCounts {
            courses: state.courses.len(),
            students: state.students.len(),
        }
    }

    // Courses

    /// All courses in insertion order
    pub fn list_courses(&self) -> Vec<Course> {
        self.state.lock().courses.values().cloned().collect()
    }

    pub fn get_course(&self, id: u64) -> Result<Course> {
        self.state
            .lock()
            .courses
            .get(&id)
            .cloned()
            .ok_or_else(AppError::course_not_found)
    }

    pub fn ensure_course(&self, id: u64) -> Result<()> {
        if self.state.lock().courses.contains_key(&id) {
            Ok(())
        } else {
            Err(AppError::course_not_found())
        }
    }

    /// Add a course; names are unique ignoring case
    pub fn create_course(&self, input: CourseInput) -> Result<Course> {
        let mut state = self.state.lock();

        if state.name_taken(&input.name) {
            return Err(AppError::Conflict(
                "A course with this name already exists.".to_string(),
            ));
        }

        let id = state.next_course_id;
        state.next_course_id += 1;

        let course = Course {
            id,
            name: input.name,
            hours: input.hours,
        };
        state.courses.insert(id, course.clone());
        info!(id, name = %course.name, "Course created");

        Ok(course)
    }

    /// Overwrite name and hours in place. Name uniqueness is not re-checked.
    pub fn update_course(&self, id: u64, input: CourseInput) -> Result<Course> {
        let mut state = self.state.lock();
        let course = state
            .courses
            .get_mut(&id)
            .ok_or_else(AppError::course_not_found)?;

        course.name = input.name;
        course.hours = input.hours;
        info!(id, name = %course.name, "Course updated");

        Ok(course.clone())
    }

    /// Remove a course. Student enrollment lists keep the id.
    pub fn delete_course(&self, id: u64) -> Result<Course> {
        let removed = self
            .state
            .lock()
            .courses
            .remove(&id)
            .ok_or_else(AppError::course_not_found)?;
        info!(id, name = %removed.name, "Course deleted");
        Ok(removed)
    }

    // Students

    /// All students in insertion order
    pub fn list_students(&self) -> Vec<Student> {
        self.state.lock().students.values().cloned().collect()
    }

    pub fn get_student(&self, id: u64) -> Result<Student> {
        self.state
            .lock()
            .students
            .get(&id)
            .cloned()
            .ok_or_else(AppError::student_not_found)
    }

    pub fn ensure_student(&self, id: u64) -> Result<()> {
        if self.state.lock().students.contains_key(&id) {
            Ok(())
        } else {
            Err(AppError::student_not_found())
        }
    }

    pub fn create_student(&self, input: StudentInput) -> Result<Student> {
        let mut state = self.state.lock();

        let id = state.next_student_id;
        state.next_student_id += 1;

        let student = Student {
            id,
            name: input.name,
            email: input.email,
            enrolled_course_ids: Vec::new(),
        };
        state.students.insert(id, student.clone());
        info!(id, name = %student.name, "Student created");

        Ok(student)
    }

    pub fn update_student(&self, id: u64, input: StudentInput) -> Result<Student> {
        let mut state = self.state.lock();
        let student = state
            .students
            .get_mut(&id)
            .ok_or_else(AppError::student_not_found)?;

        student.name = input.name;
        student.email = input.email;
        info!(id, name = %student.name, "Student updated");

        Ok(student.clone())
    }

    pub fn delete_student(&self, id: u64) -> Result<Student> {
        let removed = self
            .state
            .lock()
            .students
            .remove(&id)
            .ok_or_else(AppError::student_not_found)?;
        info!(id, name = %removed.name, "Student deleted");
        Ok(removed)
    }

    /// Append `course_id` to the student's enrollments.
    ///
    /// Checks run in order: student exists, course exists, not already enrolled.
    pub fn enroll(&self, student_id: u64, course_id: u64) -> Result<Student> {
        let mut state = self.state.lock();

        if !state.students.contains_key(&student_id) {
            return Err(AppError::student_not_found());
        }
        if !state.courses.contains_key(&course_id) {
            return Err(AppError::course_not_found());
        }

        let student = state
            .students
            .get_mut(&student_id)
            .ok_or_else(AppError::student_not_found)?;

        if student.is_enrolled(course_id) {
            return Err(AppError::Validation(
                "Student is already enrolled in this course.".to_string(),
            ));
        }

        student.enrolled_course_ids.push(course_id);
        info!(student_id, course_id, "Student enrolled");

        Ok(student.clone())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
