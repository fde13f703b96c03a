//! Dependent-session cleanup after course changes.
//!
//! Course edits are applied in two explicit steps by the caller:
//!
//! 1. Remove the sessions that no longer have a course component behind
//!    them ([`remove_course_sessions`], [`prune_inactive_components`]).
//! 2. Regenerate with locked sessions preserved.
//!
//! [`regenerate_after_course_change`] runs both steps in that order.

use rand::Rng;
use tracing::info;

use crate::models::{Course, Instructor, Room, Schedule};
use crate::scheduler::{PlacementEngine, PlacementOutcome, PlacementRequest};

/// A change to the course set.
#[derive(Debug, Clone, Copy)]
pub enum CourseChange<'a> {
    /// A new course was added; nothing to remove.
    Added(&'a Course),
    /// A course was edited; sessions of deactivated components go.
    Updated(&'a Course),
    /// A course was deleted; all its sessions go.
    Removed(&'a str),
}

/// Removes every session of a course. Returns how many were removed.
pub fn remove_course_sessions(schedule: &mut Schedule, course_id: &str) -> usize {
    schedule.remove_where(|s| s.course_id == course_id)
}

/// Removes sessions of components the course no longer offers.
///
/// Locked sessions are removed too: they have nothing left to satisfy.
pub fn prune_inactive_components(schedule: &mut Schedule, course: &Course) -> usize {
    schedule.remove_where(|s| s.course_id == course.id && !course.offers(s.session_type))
}

/// Applies step 1 for `change` to `schedule`.
pub fn remove_dependents(schedule: &mut Schedule, change: CourseChange<'_>) -> usize {
    match change {
        CourseChange::Added(_) => 0,
        CourseChange::Updated(course) => prune_inactive_components(schedule, course),
        CourseChange::Removed(course_id) => remove_course_sessions(schedule, course_id),
    }
}

/// Removes dependents of `change` from `current`, then regenerates keeping
/// locked sessions.
///
/// `courses` must already reflect the change.
pub fn regenerate_after_course_change<R: Rng + ?Sized>(
    engine: &PlacementEngine,
    change: CourseChange<'_>,
    courses: &[Course],
    instructors: &[Instructor],
    rooms: &[Room],
    current: &Schedule,
    rng: &mut R,
) -> PlacementOutcome {
    let mut cleaned = current.clone();
    let removed = remove_dependents(&mut cleaned, change);
    info!(removed, "dependent sessions removed before regeneration");

    let request = PlacementRequest::new(courses.to_vec(), instructors.to_vec(), rooms.to_vec())
        .with_current_schedule(cleaned)
        .preserve_locked(true);
    engine.generate_with_rng(&request, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Period, Session, SessionType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn locked(id: &str, course: &str, t: SessionType, period: Period) -> Session {
        let room = match t {
            SessionType::Lecture => "r1",
            SessionType::Section => "r2",
            SessionType::Lab => "r3",
        };
        Session::new(id, course, "i1", t, Day::Monday, period)
            .with_room(room)
            .with_locked(true)
    }

    fn setup() -> (Vec<Course>, Vec<Instructor>, Vec<Room>, Schedule) {
        let courses = vec![
            Course::new("c1", "CS101").with_lecture(0.83).with_lab(0.83),
            Course::new("c2", "MATH202").with_section(0.83),
        ];
        let instructors = vec![Instructor::lecturer("i1").with_course("c1").with_course("c2")];
        let rooms = vec![Room::lecture_hall("r1"), Room::section_room("r2"), Room::lab("r3")];
        let schedule = Schedule::from_sessions(vec![
            locked("l1", "c1", SessionType::Lecture, Period::P1A),
            locked("l2", "c1", SessionType::Lab, Period::P1B),
            locked("l3", "c2", SessionType::Section, Period::P2A),
        ]);
        (courses, instructors, rooms, schedule)
    }

    #[test]
    fn test_remove_course_sessions() {
        let (_, _, _, mut schedule) = setup();
        assert_eq!(remove_course_sessions(&mut schedule, "c1"), 2);
        assert_eq!(schedule.session_count(), 1);
    }

    #[test]
    fn test_prune_inactive_components() {
        let (mut courses, _, _, mut schedule) = setup();
        courses[0].lab.active = false;
        assert_eq!(prune_inactive_components(&mut schedule, &courses[0]), 1);
        assert!(schedule.session("l2").is_none());
        assert!(schedule.session("l1").is_some());
    }

    #[test]
    fn test_regenerate_after_removal_keeps_other_locks() {
        let (courses, instructors, rooms, schedule) = setup();
        let remaining: Vec<Course> = courses.into_iter().filter(|c| c.id != "c1").collect();

        let outcome = regenerate_after_course_change(
            &PlacementEngine::new(),
            CourseChange::Removed("c1"),
            &remaining,
            &instructors,
            &rooms,
            &schedule,
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(outcome.schedule.session_count(), 1);
        assert_eq!(outcome.schedule.session("l3"), schedule.session("l3"));
        assert!(outcome.is_complete());
    }

    #[test]
    fn test_regenerate_after_update_places_new_component() {
        let (mut courses, instructors, rooms, schedule) = setup();
        courses[0].lab.active = false;
        courses[0] = courses[0].clone().with_section(0.83);

        let outcome = regenerate_after_course_change(
            &PlacementEngine::new(),
            CourseChange::Updated(&courses[0]),
            &courses,
            &instructors,
            &rooms,
            &schedule,
            &mut StdRng::seed_from_u64(2),
        );
        assert!(outcome.schedule.session("l2").is_none());
        assert!(outcome.schedule.session("l1").is_some());
        assert_eq!(outcome.schedule.count_for("c1", SessionType::Section), 1);
        assert_eq!(outcome.schedule.count_for("c1", SessionType::Lab), 0);
        assert!(outcome.is_complete());
    }

    #[test]
    fn test_added_course_removes_nothing() {
        let (courses, _, _, mut schedule) = setup();
        assert_eq!(remove_dependents(&mut schedule, CourseChange::Added(&courses[0])), 0);
        assert_eq!(schedule.session_count(), 3);
    }
}
