//! Conflict detection.
//!
//! Scans a committed schedule and reports every hard-constraint violation,
//! regardless of how the sessions got there (engine, manual move, restore).
//!
//! Checks:
//! - **Double booking**: within one (day, period), a room or instructor used
//!   by more than one session. One conflict per affected session.
//! - **Constraint violations** per session: not a working day, free day,
//!   break period without eligibility, room type not matching session type.
//!
//! A session may carry several conflicts. Output is grouped by slot in
//! calendar order, then per-session checks in schedule order.

use std::collections::BTreeMap;

use crate::models::{Conflict, Instructor, Room, Schedule, Session, Slot};

/// Returns every conflict in `schedule`.
pub fn detect_conflicts(
    schedule: &Schedule,
    instructors: &[Instructor],
    rooms: &[Room],
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    let mut by_slot: BTreeMap<Slot, Vec<&Session>> = BTreeMap::new();
    for s in &schedule.sessions {
        by_slot.entry(s.slot()).or_default().push(s);
    }
    for sessions in by_slot.values() {
        check_room_double_booking(sessions, rooms, &mut conflicts);
        check_instructor_double_booking(sessions, instructors, &mut conflicts);
    }

    for s in &schedule.sessions {
        check_session_rules(s, instructors, rooms, &mut conflicts);
    }

    conflicts
}

/// Groups sessions by a key, keeping first-seen order of keys.
fn group_by<'a, K, F>(sessions: &[&'a Session], key: F) -> Vec<(K, Vec<&'a Session>)>
where
    K: PartialEq,
    F: Fn(&Session) -> Option<K>,
{
    let mut groups: Vec<(K, Vec<&'a Session>)> = Vec::new();
    for &s in sessions {
        let Some(k) = key(s) else { continue };
        match groups.iter_mut().find(|(g, _)| *g == k) {
            Some((_, members)) => members.push(s),
            None => groups.push((k, vec![s])),
        }
    }
    groups
}

fn check_room_double_booking(sessions: &[&Session], rooms: &[Room], out: &mut Vec<Conflict>) {
    for (room_id, members) in group_by(sessions, |s| s.room_id.clone()) {
        if members.len() < 2 {
            continue;
        }
        let name = rooms
            .iter()
            .find(|r| r.id == room_id)
            .map_or("Unknown Room", Room::display_name);
        for s in members {
            out.push(Conflict::double_booking(&s.id, format!("Room {name} is double booked.")));
        }
    }
}

fn check_instructor_double_booking(
    sessions: &[&Session],
    instructors: &[Instructor],
    out: &mut Vec<Conflict>,
) {
    for (instructor_id, members) in group_by(sessions, |s| Some(s.instructor_id.clone())) {
        if members.len() < 2 {
            continue;
        }
        let name = instructors
            .iter()
            .find(|i| i.id == instructor_id)
            .map_or("Unknown", Instructor::display_name);
        for s in members {
            out.push(Conflict::double_booking(&s.id, format!("{name} is double booked.")));
        }
    }
}

fn check_session_rules(
    s: &Session,
    instructors: &[Instructor],
    rooms: &[Room],
    out: &mut Vec<Conflict>,
) {
    if let Some(inst) = instructors.iter().find(|i| i.id == s.instructor_id) {
        if !inst.works_on(s.day) {
            out.push(Conflict::constraint_violation(
                &s.id,
                format!("Not a working day for {}", inst.display_name()),
            ));
        }
        if inst.free_day == s.day {
            out.push(Conflict::constraint_violation(
                &s.id,
                format!("Free day violation for {}", inst.display_name()),
            ));
        }
        if !inst.can_teach_period(s.period) {
            out.push(Conflict::constraint_violation(
                &s.id,
                format!("Break violation for {}", inst.display_name()),
            ));
        }
    }

    let room = s
        .room_id
        .as_deref()
        .and_then(|id| rooms.iter().find(|r| r.id == id));
    if let Some(room) = room {
        if !room.room_type.hosts(s.session_type) {
            out.push(Conflict::constraint_violation(
                &s.id,
                format!("Room type mismatch: {} in {}", s.session_type, room.room_type),
            ));
        }
    }
}
