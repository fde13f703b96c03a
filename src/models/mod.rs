//! Timetabling domain models.
//!
//! Provides the value types consumed by every other component: the weekly
//! grid, courses, instructors, rooms, sessions and the schedule itself.
//!
//! # Domain Mappings
//!
//! | u-timetable | Meaning |
//! |-------------|---------|
//! | Course | Catalogue course with lecture/section/lab components |
//! | Instructor | Lecturer or teaching assistant |
//! | Room | Lecture hall, section room or lab |
//! | Session | One placed 50-minute teaching period |
//! | Schedule | The weekly timetable |

mod calendar;
mod course;
mod instructor;
mod room;
mod schedule;
mod session;

pub use calendar::{Day, Period, Slot};
pub use course::{Course, CourseComponent, Curriculum};
pub use instructor::{Instructor, Role};
pub use room::{Room, RoomType};
pub use schedule::{Conflict, ConflictKind, Schedule};
pub use session::{Session, SessionType};
