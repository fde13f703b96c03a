//! Session model.
//!
//! A session is the atomic scheduled unit: one course component taught by
//! one instructor in one room during one (day, period) slot.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Day, Period, RoomType, Slot};

/// Kind of teaching session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SessionType {
    Lecture,
    Section,
    Lab,
}

impl SessionType {
    /// All session types, in course component order.
    pub const ALL: [SessionType; 3] =
        [SessionType::Lecture, SessionType::Section, SessionType::Lab];

    /// The only room type that may host this session type.
    pub fn required_room_type(self) -> RoomType {
        match self {
            SessionType::Lecture => RoomType::LectureHall,
            SessionType::Section => RoomType::SectionRoom,
            SessionType::Lab => RoomType::Lab,
        }
    }

    /// Placement difficulty (higher is placed earlier).
    ///
    /// Labs are scarcest, then lecture halls, then section rooms.
    pub fn difficulty(self) -> u8 {
        match self {
            SessionType::Lab => 3,
            SessionType::Lecture => 2,
            SessionType::Section => 1,
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A scheduled session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: String,
    pub course_id: String,
    pub instructor_id: String,
    /// `None` means the session has no room yet.
    pub room_id: Option<String>,
    pub session_type: SessionType,
    pub day: Day,
    pub period: Period,
    /// Locked sessions survive regeneration unchanged.
    pub locked: bool,
}

impl Session {
    /// Creates an unlocked session without a room.
    pub fn new(
        id: impl Into<String>,
        course_id: impl Into<String>,
        instructor_id: impl Into<String>,
        session_type: SessionType,
        day: Day,
        period: Period,
    ) -> Self {
        Self {
            id: id.into(),
            course_id: course_id.into(),
            instructor_id: instructor_id.into(),
            room_id: None,
            session_type,
            day,
            period,
            locked: false,
        }
    }

    /// Assigns a room.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Sets the locked flag.
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// The (day, period) this session occupies.
    #[inline]
    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.period)
    }

    /// Whether the session sits at the given day and period.
    #[inline]
    pub fn occupies(&self, day: Day, period: Period) -> bool {
        self.day == day && self.period == period
    }

    /// Whether the session uses the given room.
    #[inline]
    pub fn uses_room(&self, room_id: &str) -> bool {
        self.room_id.as_deref() == Some(room_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_builder() {
        let s = Session::new("s1", "c1", "i1", SessionType::Lab, Day::Monday, Period::P1A)
            .with_room("r3")
            .with_locked(true);

        assert_eq!(s.room_id.as_deref(), Some("r3"));
        assert!(s.locked);
        assert!(s.uses_room("r3"));
        assert!(!s.uses_room("r4"));
        assert!(s.occupies(Day::Monday, Period::P1A));
        assert_eq!(s.slot(), Slot::new(Day::Monday, Period::P1A));
    }

    #[test]
    fn test_unplaced_room() {
        let s = Session::new("s1", "c1", "i1", SessionType::Lecture, Day::Monday, Period::P1A);
        assert!(s.room_id.is_none());
        assert!(!s.uses_room("r1"));
    }

    #[test]
    fn test_difficulty_order() {
        assert!(SessionType::Lab.difficulty() > SessionType::Lecture.difficulty());
        assert!(SessionType::Lecture.difficulty() > SessionType::Section.difficulty());
    }
}
