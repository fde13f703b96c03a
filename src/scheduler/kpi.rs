//! Timetable quality metrics (KPIs).
//!
//! Computes the dashboard figures for a committed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total sessions | Number of placed sessions |
//! | Conflicts | Number of conflicts reported by the validator |
//! | Assigned hours | Sessions per instructor × 0.83h, rounded to 0.1h |
//! | Overloaded | Instructors whose assigned hours exceed their cap |
//! | Idle | Instructors with no sessions |
//! | Room utilization | Occupied slots / grid slots, per room |

use std::collections::HashMap;

use crate::conflicts::detect_conflicts;
use crate::decomposer::SINGLE_PERIOD_HOURS;
use crate::models::{Day, Instructor, Period, Room, Schedule};

/// Dashboard indicators for one schedule.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    pub total_sessions: usize,
    pub conflict_count: usize,
    /// instructor_id → assigned hours.
    pub assigned_hours: HashMap<String, f64>,
    /// Instructors over their weekly cap, in input order.
    pub overloaded: Vec<String>,
    /// Instructors with nothing assigned, in input order.
    pub idle: Vec<String>,
    /// room_id → fraction of the weekly grid in use (0.0..1.0).
    pub room_utilization: HashMap<String, f64>,
}

/// Assigned hours for one instructor, rounded to one decimal.
pub fn assigned_hours(schedule: &Schedule, instructor_id: &str) -> f64 {
    let count = schedule.sessions_for_instructor(instructor_id).len();
    (count as f64 * SINGLE_PERIOD_HOURS * 10.0).round() / 10.0
}

impl TimetableKpi {
    /// Computes KPIs from a schedule and the current resources.
    pub fn calculate(schedule: &Schedule, instructors: &[Instructor], rooms: &[Room]) -> Self {
        let conflict_count = detect_conflicts(schedule, instructors, rooms).len();

        let mut assigned = HashMap::new();
        let mut overloaded = Vec::new();
        let mut idle = Vec::new();
        for inst in instructors {
            let hours = assigned_hours(schedule, &inst.id);
            if hours > inst.max_hours_per_week {
                overloaded.push(inst.id.clone());
            }
            if hours == 0.0 {
                idle.push(inst.id.clone());
            }
            assigned.insert(inst.id.clone(), hours);
        }

        let grid = (Day::ALL.len() * Period::SEQUENCE.len()) as f64;
        let room_utilization = rooms
            .iter()
            .map(|r| (r.id.clone(), schedule.sessions_for_room(&r.id).len() as f64 / grid))
            .collect();

        Self {
            total_sessions: schedule.session_count(),
            conflict_count,
            assigned_hours: assigned,
            overloaded,
            idle,
            room_utilization,
        }
    }

    /// Every instructor has work and none is over cap.
    pub fn is_balanced(&self) -> bool {
        self.overloaded.is_empty() && self.idle.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, SessionType};

    fn sessions(instructor: &str, n: usize) -> Vec<Session> {
        (0..n)
            .map(|k| {
                Session::new(
                    format!("{instructor}-{k}"),
                    "c1",
                    instructor,
                    SessionType::Lecture,
                    Day::ALL[k / 6],
                    Period::SEQUENCE[k % 6],
                )
                .with_room(format!("r-{instructor}"))
            })
            .collect()
    }

    #[test]
    fn test_assigned_hours_rounding() {
        let s = Schedule::from_sessions(sessions("i1", 3));
        // 3 × 0.83 = 2.49 → 2.5
        assert!((assigned_hours(&s, "i1") - 2.5).abs() < 1e-10);
        assert_eq!(assigned_hours(&s, "nobody"), 0.0);
    }

    #[test]
    fn test_overloaded_and_idle() {
        let instructors = vec![
            Instructor::lecturer("i1").with_max_hours(2.0),
            Instructor::lecturer("i2").with_max_hours(10.0),
            Instructor::lecturer("i3"),
        ];
        let mut all = sessions("i1", 3);
        all.extend(sessions("i2", 2));
        let s = Schedule::from_sessions(all);

        let kpi = TimetableKpi::calculate(&s, &instructors, &[]);
        assert_eq!(kpi.total_sessions, 5);
        assert_eq!(kpi.overloaded, vec!["i1".to_string()]);
        assert_eq!(kpi.idle, vec!["i3".to_string()]);
        assert!((kpi.assigned_hours["i2"] - 1.7).abs() < 1e-10);
        assert!(!kpi.is_balanced());
    }

    #[test]
    fn test_conflicts_counted() {
        let instructors = vec![Instructor::lecturer("i1")];
        let rooms = vec![Room::lecture_hall("r1")];
        let s = Schedule::from_sessions(vec![
            Session::new("a", "c1", "i1", SessionType::Lecture, Day::Monday, Period::P1A)
                .with_room("r1"),
            Session::new("b", "c1", "i1", SessionType::Lecture, Day::Monday, Period::P1A)
                .with_room("r1"),
        ]);
        let kpi = TimetableKpi::calculate(&s, &instructors, &rooms);
        // Room and instructor double booking on both sessions.
        assert_eq!(kpi.conflict_count, 4);
        assert!((kpi.room_utilization["r1"] - 2.0 / 42.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty() {
        let kpi = TimetableKpi::calculate(&Schedule::new(), &[], &[]);
        assert_eq!(kpi.total_sessions, 0);
        assert_eq!(kpi.conflict_count, 0);
        assert!(kpi.is_balanced());
    }
}
