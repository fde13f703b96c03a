//! Weekly teaching timetable engine.
//!
//! Allocates lecture, section and lab sessions to instructors, rooms and
//! (day, period) slots under hard constraints (availability, room type, no
//! double booking) and soft preferences (preferred day).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Instructor`, `Room`, `Session`,
//!   `Schedule`, `Conflict`, and the weekly grid (`Day`, `Period`, `Slot`)
//! - **`decomposer`**: Course hours → atomic placement tasks
//! - **`scheduler`**: Greedy randomized placement engine and KPIs
//! - **`conflicts`**: Hard-constraint scan of a committed schedule
//! - **`moves`**: Single-session relocation check for interactive editing
//! - **`history`**: Append-only version log with restore
//! - **`cascade`**: Dependent-session cleanup before regeneration
//! - **`validation`**: Input integrity checks (ids, hours, working days)
//!
//! # Flow
//!
//! ```text
//! courses ─▶ decomposer ─▶ scheduler ─▶ history ─▶ active schedule
//!                                                      │
//!                                   conflicts ◀────────┤
//!                                   moves     ◀────────┘
//! ```
//!
//! The engine is synchronous and free of I/O. Every randomized step takes a
//! caller-supplied `rand::Rng`, so a seeded generator reproduces a run
//! exactly.

pub mod cascade;
pub mod conflicts;
pub mod decomposer;
pub mod error;
pub mod history;
pub mod models;
pub mod moves;
pub mod scheduler;
pub mod validation;

pub use error::{Result, TimetableError};
