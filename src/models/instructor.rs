//! Instructor model.
//!
//! Instructors are the human resource of the timetable. Each one works five
//! of the six week days, keeps one of those five as a free campus day,
//! and may or may not teach during the midday break.

use serde::{Deserialize, Serialize};

use super::{Day, Period};

/// Teaching role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Lecturer,
    TeachingAssistant,
}

/// An instructor that can be assigned to sessions.
///
/// Assigned hours are not stored here; they are derived from the schedule
/// (see [`crate::scheduler::TimetableKpi`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    /// Unique instructor identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub role: Role,
    pub department: String,
    /// Courses this instructor is qualified to teach.
    pub capable_course_ids: Vec<String>,
    /// Exactly five of the six week days.
    pub working_days: Vec<Day>,
    /// A working day on which the instructor is never scheduled.
    pub free_day: Day,
    /// Weekly hour cap.
    pub max_hours_per_week: f64,
    /// Whether the instructor may teach in the break period.
    pub can_teach_break: bool,
}

impl Instructor {
    /// Creates an instructor working Monday to Friday with Friday free.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role,
            department: String::new(),
            capable_course_ids: Vec::new(),
            working_days: Day::ALL[..5].to_vec(),
            free_day: Day::Friday,
            max_hours_per_week: 12.0,
            can_teach_break: false,
        }
    }

    /// Creates a lecturer.
    pub fn lecturer(id: impl Into<String>) -> Self {
        Self::new(id, Role::Lecturer)
    }

    /// Creates a teaching assistant.
    pub fn teaching_assistant(id: impl Into<String>) -> Self {
        Self::new(id, Role::TeachingAssistant)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Adds a course the instructor can teach.
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.capable_course_ids.push(course_id.into());
        self
    }

    /// Replaces the working-day set.
    pub fn with_working_days(mut self, days: impl IntoIterator<Item = Day>) -> Self {
        self.working_days = days.into_iter().collect();
        self
    }

    /// Sets the free campus day.
    pub fn with_free_day(mut self, day: Day) -> Self {
        self.free_day = day;
        self
    }

    /// Sets the weekly hour cap.
    pub fn with_max_hours(mut self, hours: f64) -> Self {
        self.max_hours_per_week = hours;
        self
    }

    /// Allows or forbids teaching in the break period.
    pub fn with_break_teaching(mut self, allowed: bool) -> Self {
        self.can_teach_break = allowed;
        self
    }

    /// Whether the instructor is qualified for a course.
    pub fn can_teach(&self, course_id: &str) -> bool {
        self.capable_course_ids.iter().any(|c| c == course_id)
    }

    /// Whether `day` is one of the working days.
    pub fn works_on(&self, day: Day) -> bool {
        self.working_days.contains(&day)
    }

    /// Working day that is not the free day.
    pub fn is_available_on(&self, day: Day) -> bool {
        self.works_on(day) && self.free_day != day
    }

    /// Whether the instructor may teach in `period`.
    pub fn can_teach_period(&self, period: Period) -> bool {
        !period.is_break() || self.can_teach_break
    }

    /// Day and period checks combined. Occupancy is not considered.
    pub fn is_available_at(&self, day: Day, period: Period) -> bool {
        self.is_available_on(day) && self.can_teach_period(period)
    }

    /// Name for messages, falling back to the id when unnamed.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
