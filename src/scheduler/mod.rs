//! Placement engine and KPI evaluation.
//!
//! # Algorithm
//!
//! `PlacementEngine` is a greedy, randomized first-fit construction
//! heuristic. It never backtracks: tasks that cannot be placed are
//! reported as failures next to the partial schedule, and running it again
//! (with fresh randomness) is the retry mechanism.
//!
//! # KPI
//!
//! `TimetableKpi` computes dashboard metrics: session and conflict counts,
//! assigned hours per instructor, overloaded/idle instructors and room
//! utilization.

mod config;
mod kpi;
mod placement;

pub use config::EngineConfig;
pub use kpi::{assigned_hours, TimetableKpi};
pub use placement::{
    FailureReason, PlacementEngine, PlacementFailure, PlacementOutcome, PlacementRequest,
};
