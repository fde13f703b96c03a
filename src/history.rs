//! Schedule version history.
//!
//! Append-only log of generated schedules. Every regeneration records one
//! immutable snapshot and makes it the active schedule; restoring a
//! snapshot copies its sessions back into the active schedule without
//! touching the log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{Result, TimetableError};
use crate::models::{Schedule, Session};
use crate::scheduler::PlacementOutcome;

/// One recorded schedule version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleHistoryItem {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// "Version N".
    pub label: String,
    pub sessions: Vec<Session>,
    /// Tasks that could not be placed in this run.
    pub failed_count: usize,
}

/// Version log plus the currently active schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleHistory {
    /// Most recent first.
    items: Vec<ScheduleHistoryItem>,
    active: Schedule,
    counter: u64,
}

impl ScheduleHistory {
    /// Creates an empty history with an empty active schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active schedule.
    pub fn active(&self) -> &Schedule {
        &self.active
    }

    /// Mutable access for interactive edits (moves, locks, deletions).
    /// Edits are not recorded as versions.
    pub fn active_mut(&mut self) -> &mut Schedule {
        &mut self.active
    }

    /// Replaces the active schedule without recording a version.
    pub fn set_active(&mut self, schedule: Schedule) {
        self.active = schedule;
    }

    /// Recorded versions, most recent first.
    pub fn items(&self) -> &[ScheduleHistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Most recent version.
    pub fn latest(&self) -> Option<&ScheduleHistoryItem> {
        self.items.first()
    }

    /// Looks up a version by id.
    pub fn get(&self, id: &str) -> Option<&ScheduleHistoryItem> {
        self.items.iter().find(|h| h.id == id)
    }

    /// Appends a snapshot and makes it the active schedule.
    pub fn record_version(
        &mut self,
        sessions: Vec<Session>,
        failed_count: usize,
    ) -> &ScheduleHistoryItem {
        self.counter += 1;
        let item = ScheduleHistoryItem {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            label: format!("Version {}", self.counter),
            sessions: sessions.clone(),
            failed_count,
        };
        info!(
            id = %item.id,
            label = %item.label,
            sessions = item.sessions.len(),
            failed_count,
            "schedule version recorded"
        );
        self.active = Schedule::from_sessions(sessions);
        self.items.insert(0, item);
        &self.items[0]
    }

    /// Records the result of a placement run.
    pub fn record_outcome(&mut self, outcome: &PlacementOutcome) -> &ScheduleHistoryItem {
        self.record_version(outcome.schedule.sessions.clone(), outcome.failed_count())
    }

    /// Makes a recorded version the active schedule.
    ///
    /// An unknown id leaves the active schedule untouched and returns
    /// [`TimetableError::VersionNotFound`].
    pub fn restore(&mut self, id: &str) -> Result<&Schedule> {
        let Some(item) = self.items.iter().find(|h| h.id == id) else {
            warn!(id, "restore requested for unknown schedule version");
            return Err(TimetableError::version_not_found(id));
        };
        info!(id, label = %item.label, "schedule version restored");
        self.active = Schedule::from_sessions(item.sessions.clone());
        Ok(&self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Period, SessionType};

    fn session(id: &str, day: Day) -> Session {
        Session::new(id, "c1", "i1", SessionType::Lecture, day, Period::P1A).with_room("r1")
    }

    #[test]
    fn test_record_sets_active_and_labels() {
        let mut h = ScheduleHistory::new();
        assert!(h.is_empty());

        let first_id = h.record_version(vec![session("a", Day::Monday)], 0).id.clone();
        let second = h.record_version(vec![session("b", Day::Tuesday)], 2);
        assert_eq!(second.label, "Version 2");
        assert_eq!(second.failed_count, 2);

        assert_eq!(h.len(), 2);
        assert_eq!(h.items()[0].label, "Version 2");
        assert_eq!(h.items()[1].label, "Version 1");
        assert_eq!(h.items()[1].id, first_id);
        assert_eq!(h.active().sessions[0].id, "b");
        assert!(h.items()[0].created_at >= h.items()[1].created_at);
    }

    #[test]
    fn test_restore() {
        let mut h = ScheduleHistory::new();
        let v1 = h.record_version(vec![session("a", Day::Monday)], 0).id.clone();
        h.record_version(vec![session("b", Day::Tuesday)], 0);

        let restored = h.restore(&v1).unwrap();
        assert_eq!(restored.sessions[0].id, "a");
        // Log untouched
        assert_eq!(h.len(), 2);
        assert_eq!(h.latest().unwrap().label, "Version 2");
    }

    #[test]
    fn test_restore_is_idempotent() {
        let mut h = ScheduleHistory::new();
        let v1 = h
            .record_version(vec![session("a", Day::Monday), session("b", Day::Friday)], 1)
            .id
            .clone();
        h.record_version(Vec::new(), 0);

        let once = h.restore(&v1).unwrap().clone();
        let twice = h.restore(&v1).unwrap().clone();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_restore_unknown_is_noop() {
        let mut h = ScheduleHistory::new();
        h.record_version(vec![session("a", Day::Monday)], 0);
        let before = h.active().clone();

        let err = h.restore("missing").unwrap_err();
        assert!(matches!(err, TimetableError::VersionNotFound { ref id } if id == "missing"));
        assert_eq!(h.active(), &before);
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn test_edits_do_not_mutate_snapshots() {
        let mut h = ScheduleHistory::new();
        let v1 = h.record_version(vec![session("a", Day::Monday)], 0).id.clone();
        h.active_mut().remove_session("a");
        assert!(h.active().is_empty());
        assert_eq!(h.get(&v1).unwrap().sessions.len(), 1);
    }

    #[test]
    fn test_labels_keep_counting() {
        let mut h = ScheduleHistory::new();
        for _ in 0..3 {
            h.record_version(Vec::new(), 0);
        }
        assert_eq!(h.latest().unwrap().label, "Version 3");
    }
}
