//! Room model.
//!
//! Rooms are the space resource. A room's type decides which session type
//! it can host, one to one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SessionType;

/// A room that can host sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub room_type: RoomType,
    /// Seat count.
    pub capacity: u32,
}

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    LectureHall,
    SectionRoom,
    Lab,
}

impl RoomType {
    /// Whether a room of this type can host the given session type.
    #[inline]
    pub fn hosts(self, session_type: SessionType) -> bool {
        session_type.required_room_type() == self
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoomType::LectureHall => "Lecture Hall",
            RoomType::SectionRoom => "Section Room",
            RoomType::Lab => "Lab",
        })
    }
}

impl Room {
    /// Creates a new room.
    pub fn new(id: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            room_type,
            capacity: 0,
        }
    }

    /// Creates a lecture hall.
    pub fn lecture_hall(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::LectureHall)
    }

    /// Creates a section room.
    pub fn section_room(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::SectionRoom)
    }

    /// Creates a lab.
    pub fn lab(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Lab)
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_builder() {
        let r = Room::lecture_hall("r1").with_name("Hall A").with_capacity(100);
        assert_eq!(r.id, "r1");
        assert_eq!(r.name, "Hall A");
        assert_eq!(r.room_type, RoomType::LectureHall);
        assert_eq!(r.capacity, 100);
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        assert_eq!(Room::lab("r3").display_name(), "r3");
        assert_eq!(Room::lab("r3").with_name("Lab 3").display_name(), "Lab 3");
    }

    #[test]
    fn test_room_type_mapping() {
        assert!(RoomType::LectureHall.hosts(SessionType::Lecture));
        assert!(RoomType::SectionRoom.hosts(SessionType::Section));
        assert!(RoomType::Lab.hosts(SessionType::Lab));
        assert!(!RoomType::Lab.hosts(SessionType::Lecture));
        assert!(!RoomType::LectureHall.hosts(SessionType::Section));
    }
}
