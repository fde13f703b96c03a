//! Interactive move validation.
//!
//! Checks a single relocation of one existing session before the caller
//! commits it. Rules are evaluated in order and the first failure wins:
//!
//! 1. The session's instructor must exist.
//! 2. The new day must be a working day.
//! 3. The new day must not be the free day.
//! 4. The break period requires break eligibility.
//! 5. No other session may hold the instructor at the new slot.
//! 6. If the session has a room, no other session may hold the room there.

use tracing::debug;

use crate::error::{Result, TimetableError};
use crate::models::{Day, Instructor, Period, Room, Schedule, Session};

/// Reason a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("Instructor not found")]
    InstructorNotFound,
    #[error("Not a working day")]
    NotWorkingDay,
    #[error("Free campus day")]
    FreeCampusDay,
    #[error("Cannot teach break")]
    BreakNotAllowed,
    #[error("Instructor busy")]
    InstructorBusy,
    #[error("Room occupied")]
    RoomOccupied,
}

/// Checks whether `session` may move to (`day`, `period`). Pure predicate.
///
/// `rooms` is accepted for parity with [`crate::conflicts::detect_conflicts`];
/// room occupancy is decided from the schedule alone.
pub fn validate_move(
    session: &Session,
    day: Day,
    period: Period,
    schedule: &Schedule,
    instructors: &[Instructor],
    _rooms: &[Room],
) -> std::result::Result<(), MoveRejection> {
    let instructor = instructors
        .iter()
        .find(|i| i.id == session.instructor_id)
        .ok_or(MoveRejection::InstructorNotFound)?;

    if !instructor.works_on(day) {
        return Err(MoveRejection::NotWorkingDay);
    }
    if instructor.free_day == day {
        return Err(MoveRejection::FreeCampusDay);
    }
    if !instructor.can_teach_period(period) {
        return Err(MoveRejection::BreakNotAllowed);
    }

    let others: Vec<&Session> = schedule
        .sessions
        .iter()
        .filter(|s| s.id != session.id && s.occupies(day, period))
        .collect();
    if others.iter().any(|s| s.instructor_id == session.instructor_id) {
        return Err(MoveRejection::InstructorBusy);
    }
    if let Some(room_id) = session.room_id.as_deref() {
        if others.iter().any(|s| s.uses_room(room_id)) {
            return Err(MoveRejection::RoomOccupied);
        }
    }

    Ok(())
}

/// Validates and commits a move of the session with `session_id`.
///
/// On success the stored session's day and period are rewritten and the
/// updated session is returned. Other fields, including `locked`, stay
/// as they were.
pub fn apply_move(
    schedule: &mut Schedule,
    session_id: &str,
    day: Day,
    period: Period,
    instructors: &[Instructor],
    rooms: &[Room],
) -> Result<Session> {
    let session = schedule
        .session(session_id)
        .ok_or_else(|| TimetableError::session_not_found(session_id))?;

    if let Err(reason) = validate_move(session, day, period, schedule, instructors, rooms) {
        debug!(session = session_id, %day, %period, %reason, "move rejected");
        return Err(reason.into());
    }

    let session = schedule
        .session_mut(session_id)
        .ok_or_else(|| TimetableError::session_not_found(session_id))?;
    session.day = day;
    session.period = period;
    Ok(session.clone())
}
