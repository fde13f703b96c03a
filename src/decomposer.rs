//! Task decomposition.
//!
//! Turns a course's weekly component hours into atomic placement tasks.
//! A period is 50 minutes (≈0.83h); a double period is two back-to-back
//! periods (≈1.67h).
//!
//! # Algorithm
//!
//! For each active component with at least [`MIN_SCHEDULABLE_HOURS`]:
//! 1. While the remainder is at least [`PAIR_THRESHOLD_HOURS`], emit a
//!    consecutive-pair task and consume [`DOUBLE_PERIOD_HOURS`].
//! 2. Otherwise emit a single task and consume [`SINGLE_PERIOD_HOURS`].
//! 3. Stop once the remainder falls below [`MIN_SCHEDULABLE_HOURS`].
//!
//! A remainder below the threshold is dropped (e.g. 2.0h yields one pair
//! and 0.33h is not scheduled). Components that are not finite or exceed
//! [`MAX_COMPONENT_HOURS`] are skipped with a warning.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{Course, SessionType};

/// Hours covered by one 50-minute period.
pub const SINGLE_PERIOD_HOURS: f64 = 0.83;
/// Hours covered by a double period.
pub const DOUBLE_PERIOD_HOURS: f64 = 1.67;
/// Components below this are negligible and produce no tasks.
pub const MIN_SCHEDULABLE_HOURS: f64 = 0.8;
/// A remainder at or above this becomes a consecutive pair.
pub const PAIR_THRESHOLD_HOURS: f64 = 1.5;
/// Every period of the six-day week, break included.
pub const MAX_COMPONENT_HOURS: f64 = 42.0 * SINGLE_PERIOD_HOURS;

/// One atomic placement requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementTask {
    /// Owning course.
    pub course_id: String,
    pub session_type: SessionType,
    /// Needs two consecutive periods with the same instructor and room.
    pub consecutive: bool,
}

impl PlacementTask {
    /// Creates a single-period task.
    pub fn single(course_id: impl Into<String>, session_type: SessionType) -> Self {
        Self {
            course_id: course_id.into(),
            session_type,
            consecutive: false,
        }
    }

    /// Creates a consecutive-pair task.
    pub fn pair(course_id: impl Into<String>, session_type: SessionType) -> Self {
        Self {
            course_id: course_id.into(),
            session_type,
            consecutive: true,
        }
    }

    /// Weekly hours this task accounts for.
    pub fn hours(&self) -> f64 {
        if self.consecutive {
            DOUBLE_PERIOD_HOURS
        } else {
            SINGLE_PERIOD_HOURS
        }
    }

    /// Number of sessions the task places.
    pub fn session_count(&self) -> usize {
        if self.consecutive {
            2
        } else {
            1
        }
    }
}

/// Decomposes one course, lecture then section then lab.
pub fn decompose_course(course: &Course) -> Vec<PlacementTask> {
    let mut tasks = Vec::new();
    for session_type in SessionType::ALL {
        let component = course.component(session_type);
        if !component.active || component.hours < MIN_SCHEDULABLE_HOURS {
            continue;
        }
        if !component.hours.is_finite() || component.hours > MAX_COMPONENT_HOURS {
            warn!(
                course = %course.code,
                %session_type,
                hours = component.hours,
                "component hours out of range, skipped"
            );
            continue;
        }

        let mut remaining = component.hours;
        while remaining >= MIN_SCHEDULABLE_HOURS {
            if remaining >= PAIR_THRESHOLD_HOURS {
                tasks.push(PlacementTask::pair(&course.id, session_type));
                remaining -= DOUBLE_PERIOD_HOURS;
            } else {
                tasks.push(PlacementTask::single(&course.id, session_type));
                remaining -= SINGLE_PERIOD_HOURS;
            }
        }

        if remaining > 0.05 {
            debug!(
                course = %course.code,
                %session_type,
                dropped_hours = remaining,
                "component hours do not split into whole periods"
            );
        }
    }
    tasks
}

/// Decomposes every course, preserving course order.
pub fn decompose_all(courses: &[Course]) -> Vec<PlacementTask> {
    courses.iter().flat_map(decompose_course).collect()
}
