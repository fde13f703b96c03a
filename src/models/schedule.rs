//! Schedule (solution) model.
//!
//! A schedule is the full list of sessions placed on the weekly grid.
//! Conflicts are never stored on it; they are recomputed from the current
//! sessions by [`crate::conflicts::detect_conflicts`].

use serde::{Deserialize, Serialize};

use super::{Day, Period, Session, SessionType};

/// A weekly timetable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub sessions: Vec<Session>,
}

/// A hard-constraint violation found in a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Session the conflict is reported against.
    pub session_id: String,
    pub kind: ConflictKind,
    /// Human-readable description.
    pub message: String,
}

/// Classification of conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictKind {
    /// A room or instructor is used twice in the same slot.
    DoubleBooking,
    /// Availability, break or room-type rule broken.
    ConstraintViolation,
    /// Room too small for the session.
    Capacity,
}

impl Conflict {
    /// Creates a double-booking conflict.
    pub fn double_booking(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            kind: ConflictKind::DoubleBooking,
            message: message.into(),
        }
    }

    /// Creates a constraint-violation conflict.
    pub fn constraint_violation(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            kind: ConflictKind::ConstraintViolation,
            message: message.into(),
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing session list.
    pub fn from_sessions(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    /// Adds a session.
    pub fn add_session(&mut self, session: Session) {
        self.sessions.push(session);
    }

    /// Number of sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Finds a session by id.
    pub fn session(&self, session_id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == session_id)
    }

    /// Mutable lookup by id.
    pub fn session_mut(&mut self, session_id: &str) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| s.id == session_id)
    }

    /// All sessions taught by an instructor.
    pub fn sessions_for_instructor(&self, instructor_id: &str) -> Vec<&Session> {
        self.sessions
            .iter()
            .filter(|s| s.instructor_id == instructor_id)
            .collect()
    }

    /// All sessions of a course.
    pub fn sessions_for_course(&self, course_id: &str) -> Vec<&Session> {
        self.sessions
            .iter()
            .filter(|s| s.course_id == course_id)
            .collect()
    }

    /// All sessions held in a room.
    pub fn sessions_for_room(&self, room_id: &str) -> Vec<&Session> {
        self.sessions.iter().filter(|s| s.uses_room(room_id)).collect()
    }

    /// Sessions sitting in one (day, period) cell.
    pub fn sessions_at(&self, day: Day, period: Period) -> Vec<&Session> {
        self.sessions
            .iter()
            .filter(|s| s.occupies(day, period))
            .collect()
    }

    /// Whether an instructor or room is already taken at (day, period).
    pub fn is_occupied(
        &self,
        day: Day,
        period: Period,
        instructor_id: &str,
        room_id: &str,
    ) -> bool {
        self.sessions.iter().any(|s| {
            s.occupies(day, period) && (s.instructor_id == instructor_id || s.uses_room(room_id))
        })
    }

    /// Number of sessions for a course component.
    pub fn count_for(&self, course_id: &str, session_type: SessionType) -> usize {
        self.sessions
            .iter()
            .filter(|s| s.course_id == course_id && s.session_type == session_type)
            .count()
    }

    /// Copies of the locked sessions, in schedule order.
    pub fn locked_sessions(&self) -> Vec<Session> {
        self.sessions.iter().filter(|s| s.locked).cloned().collect()
    }

    /// Flips the locked flag. Returns the new value, or `None` if unknown.
    pub fn toggle_lock(&mut self, session_id: &str) -> Option<bool> {
        let session = self.session_mut(session_id)?;
        session.locked = !session.locked;
        Some(session.locked)
    }

    /// Removes a session by id and returns it.
    pub fn remove_session(&mut self, session_id: &str) -> Option<Session> {
        let idx = self.sessions.iter().position(|s| s.id == session_id)?;
        Some(self.sessions.remove(idx))
    }

    /// Replaces the session with the same id. Returns the previous value.
    pub fn replace_session(&mut self, session: Session) -> Option<Session> {
        let slot = self.session_mut(&session.id)?;
        Some(std::mem::replace(slot, session))
    }

    /// Removes every session matching `pred`. Returns how many were removed.
    pub fn remove_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&Session) -> bool,
    {
        let before = self.sessions.len();
        self.sessions.retain(|s| !pred(s));
        before - self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_session(
            Session::new("s1", "c1", "i1", SessionType::Lecture, Day::Monday, Period::P1A)
                .with_room("r1"),
        );
        s.add_session(
            Session::new("s2", "c1", "i1", SessionType::Lecture, Day::Monday, Period::P1B)
                .with_room("r1")
                .with_locked(true),
        );
        s.add_session(
            Session::new("s3", "c2", "i2", SessionType::Section, Day::Monday, Period::P1A)
                .with_room("r5"),
        );
        s
    }

    #[test]
    fn test_queries() {
        let s = sample_schedule();
        assert_eq!(s.session_count(), 3);
        assert_eq!(s.sessions_for_instructor("i1").len(), 2);
        assert_eq!(s.sessions_for_course("c2").len(), 1);
        assert_eq!(s.sessions_for_room("r1").len(), 2);
        assert_eq!(s.sessions_at(Day::Monday, Period::P1A).len(), 2);
        assert_eq!(s.count_for("c1", SessionType::Lecture), 2);
        assert_eq!(s.count_for("c1", SessionType::Lab), 0);
    }

    #[test]
    fn test_is_occupied() {
        let s = sample_schedule();
        // Same instructor
        assert!(s.is_occupied(Day::Monday, Period::P1A, "i1", "r9"));
        // Same room
        assert!(s.is_occupied(Day::Monday, Period::P1A, "i9", "r5"));
        // Free cell
        assert!(!s.is_occupied(Day::Tuesday, Period::P1A, "i1", "r1"));
    }

    #[test]
    fn test_locked_sessions_and_toggle() {
        let mut s = sample_schedule();
        let locked = s.locked_sessions();
        assert_eq!(locked.len(), 1);
        assert_eq!(locked[0].id, "s2");

        assert_eq!(s.toggle_lock("s1"), Some(true));
        assert_eq!(s.locked_sessions().len(), 2);
        assert_eq!(s.toggle_lock("nope"), None);
    }

    #[test]
    fn test_remove_and_replace() {
        let mut s = sample_schedule();
        let removed = s.remove_session("s3").unwrap();
        assert_eq!(removed.course_id, "c2");
        assert!(s.session("s3").is_none());

        let mut moved = s.session("s1").unwrap().clone();
        moved.day = Day::Thursday;
        let old = s.replace_session(moved).unwrap();
        assert_eq!(old.day, Day::Monday);
        assert_eq!(s.session("s1").unwrap().day, Day::Thursday);

        assert_eq!(s.remove_where(|x| x.course_id == "c1"), 2);
        assert!(s.is_empty());
    }

    #[test]
    fn test_conflict_factories() {
        let c = Conflict::double_booking("s1", "Room Hall A is double booked.");
        assert_eq!(c.kind, ConflictKind::DoubleBooking);
        let c = Conflict::constraint_violation("s1", "Free day violation");
        assert_eq!(c.kind, ConflictKind::ConstraintViolation);
    }
}
