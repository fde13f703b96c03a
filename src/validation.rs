//! Input validation for timetabling problems.
//!
//! The engine assumes well-formed entities. These checks belong at the
//! boundary where courses, instructors and rooms are created or edited.
//! Detects:
//! - Duplicate IDs
//! - Courses with no hours at all
//! - Component hours that are negative, not finite, or beyond a full week
//! - Inactive components that still carry hours
//! - Instructors without exactly five distinct working days
//! - Free days outside the working days
//! - Capabilities that reference unknown courses

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::decomposer::MAX_COMPONENT_HOURS;
use crate::error::{Result, TimetableError};
use crate::models::{Course, Instructor, Room, SessionType};

/// Validation result.
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A course has zero total hours.
    EmptyCourse,
    /// Component hours are negative, NaN, infinite, or exceed the week.
    InvalidHours,
    /// A component with `active = false` carries hours.
    InactiveComponentHours,
    /// Working-day set is not exactly five distinct days.
    WorkingDayCount,
    /// Free day is not one of the working days.
    FreeDayNotWorking,
    /// Capability references a course that doesn't exist.
    UnknownCourse,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates courses, instructors and rooms together.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    courses: &[Course],
    instructors: &[Instructor],
    rooms: &[Room],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for c in courses {
        if !course_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
        errors.extend(check_course(c));
    }

    let mut instructor_ids = HashSet::new();
    for i in instructors {
        if !instructor_ids.insert(i.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate instructor ID: {}", i.id),
            ));
        }
        errors.extend(check_instructor(i));
        for cid in &i.capable_course_ids {
            if !course_ids.contains(cid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCourse,
                    format!("Instructor '{}' references unknown course '{}'", i.id, cid),
                ));
            }
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Like [`validate_input`], folded into the crate error type.
pub fn ensure_valid(
    courses: &[Course],
    instructors: &[Instructor],
    rooms: &[Room],
) -> Result<()> {
    validate_input(courses, instructors, rooms).map_err(TimetableError::InvalidInput)
}

/// Shape checks for a single course.
pub fn check_course(course: &Course) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if course.total_hours() <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCourse,
            format!("Course '{}' has no component with hours assigned", course.code),
        ));
    }
    for t in SessionType::ALL {
        let component = course.component(t);
        if !component.hours.is_finite()
            || component.hours < 0.0
            || component.hours > MAX_COMPONENT_HOURS
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHours,
                format!("Course '{}' has invalid {} hours: {}", course.code, t, component.hours),
            ));
        }
        if !component.active && component.hours != 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InactiveComponentHours,
                format!("Course '{}' has {} hours on inactive {}", course.code, component.hours, t),
            ));
        }
    }
    errors
}

/// Shape checks for a single instructor.
pub fn check_instructor(instructor: &Instructor) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let distinct: HashSet<_> = instructor.working_days.iter().collect();
    if instructor.working_days.len() != 5 || distinct.len() != 5 {
        errors.push(ValidationError::new(
            ValidationErrorKind::WorkingDayCount,
            format!(
                "Instructor '{}' must have exactly 5 working days, has {}",
                instructor.id,
                distinct.len()
            ),
        ));
    }
    if !instructor.works_on(instructor.free_day) {
        errors.push(ValidationError::new(
            ValidationErrorKind::FreeDayNotWorking,
            format!(
                "Instructor '{}' free day {} is not a working day",
                instructor.id, instructor.free_day
            ),
        ));
    }
    errors
}
