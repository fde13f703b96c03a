//! Course model.
//!
//! A course declares up to three weekly components (lecture, section, lab),
//! each toggled independently and carrying a duration in hours.
//! The Task Decomposer turns those hours into placement tasks.

use serde::{Deserialize, Serialize};

use super::{Day, SessionType};

/// Curriculum generation a course belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Curriculum {
    #[default]
    New,
    Old,
}

/// One toggleable component of a course.
///
/// An inactive component carries zero hours.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CourseComponent {
    /// Whether the course has this component at all.
    pub active: bool,
    /// Weekly hours required (0.83 per single period, 1.67 per double).
    pub hours: f64,
}

impl CourseComponent {
    /// An active component with the given weekly hours.
    pub fn active(hours: f64) -> Self {
        Self { active: true, hours }
    }

    /// An inactive component.
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Hours that count towards the course total.
    #[inline]
    pub fn effective_hours(&self) -> f64 {
        if self.active {
            self.hours
        } else {
            0.0
        }
    }
}

/// A course to be timetabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Catalogue code (e.g., "CS101").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Curriculum tag.
    pub curriculum: Curriculum,
    pub lecture: CourseComponent,
    pub section: CourseComponent,
    pub lab: CourseComponent,
    /// Soft preference for a single teaching day.
    pub preferred_day: Option<Day>,
}

impl Course {
    /// Creates a course with no active components.
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: String::new(),
            curriculum: Curriculum::default(),
            lecture: CourseComponent::inactive(),
            section: CourseComponent::inactive(),
            lab: CourseComponent::inactive(),
            preferred_day: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the curriculum tag.
    pub fn with_curriculum(mut self, curriculum: Curriculum) -> Self {
        self.curriculum = curriculum;
        self
    }

    /// Activates the lecture component.
    pub fn with_lecture(mut self, hours: f64) -> Self {
        self.lecture = CourseComponent::active(hours);
        self
    }

    /// Activates the section component.
    pub fn with_section(mut self, hours: f64) -> Self {
        self.section = CourseComponent::active(hours);
        self
    }

    /// Activates the lab component.
    pub fn with_lab(mut self, hours: f64) -> Self {
        self.lab = CourseComponent::active(hours);
        self
    }

    /// Sets the preferred teaching day.
    pub fn with_preferred_day(mut self, day: Day) -> Self {
        self.preferred_day = Some(day);
        self
    }

    /// The component backing a session type.
    pub fn component(&self, session_type: SessionType) -> &CourseComponent {
        match session_type {
            SessionType::Lecture => &self.lecture,
            SessionType::Section => &self.section,
            SessionType::Lab => &self.lab,
        }
    }

    /// Whether the course currently offers the given session type.
    pub fn offers(&self, session_type: SessionType) -> bool {
        self.component(session_type).active
    }

    /// Total weekly hours across active components.
    pub fn total_hours(&self) -> f64 {
        SessionType::ALL
            .iter()
            .map(|&t| self.component(t).effective_hours())
            .sum()
    }
}
