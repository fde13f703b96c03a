//! Placement engine configuration.

use serde::{Deserialize, Serialize};

use crate::decomposer::SINGLE_PERIOD_HOURS;
use crate::error::Result;

/// Tunables for the placement engine.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial JSON document such as `{"load_tolerance_hours": 1.0}` is valid.
///
/// # Example
///
/// ```
/// use u_timetable::scheduler::EngineConfig;
///
/// let cfg = EngineConfig::from_json(r#"{"load_tolerance_hours": 1.0}"#).unwrap();
/// assert_eq!(cfg.load_tolerance_hours, 1.0);
/// assert_eq!(cfg.single_load_hours, 0.83);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Slack allowed above an instructor's weekly cap.
    pub load_tolerance_hours: f64,
    /// Load charged for a single-period task and for each pre-existing session.
    pub single_load_hours: f64,
    /// Load charged for a consecutive pair.
    pub pair_load_hours: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            load_tolerance_hours: 0.5,
            single_load_hours: SINGLE_PERIOD_HOURS,
            pair_load_hours: 1.66,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load charged for a task.
    #[inline]
    pub fn task_load(&self, consecutive: bool) -> f64 {
        if consecutive {
            self.pair_load_hours
        } else {
            self.single_load_hours
        }
    }
}
