//! Greedy randomized placement engine.
//!
//! # Algorithm
//!
//! 1. Seed the working schedule with the locked sessions of the previous
//!    schedule (or nothing, when starting over).
//! 2. Decompose every course into tasks and drop the tasks already covered
//!    by locked sessions of the same course and type.
//! 3. Order tasks: consecutive pairs first, then Lab > Lecture > Section,
//!    ties broken at random.
//! 4. For each task, filter qualified instructors with spare load and
//!    matching rooms, shuffle both, shuffle the (day × period) grid and take
//!    the first instructor → room → slot combination that is free.
//!
//! A placed session is never moved again. Tasks that cannot be placed are
//! reported as [`PlacementFailure`]s next to the partial schedule.
//!
//! # Complexity
//! O(t * i * r * s) where t=tasks, i=instructors, r=rooms, s=slots (42),
//! each slot check scanning the working schedule.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::EngineConfig;
use crate::decomposer::{decompose_all, PlacementTask};
use crate::models::{Course, Day, Instructor, Period, Room, Schedule, Session, SessionType, Slot};

/// Input container for a regeneration.
#[derive(Debug, Clone, Default)]
pub struct PlacementRequest {
    pub courses: Vec<Course>,
    pub instructors: Vec<Instructor>,
    pub rooms: Vec<Room>,
    /// Schedule being replaced.
    pub current: Schedule,
    /// Keep locked sessions of `current` instead of starting over.
    pub preserve_locked: bool,
}

impl PlacementRequest {
    /// Creates a from-scratch request.
    pub fn new(courses: Vec<Course>, instructors: Vec<Instructor>, rooms: Vec<Room>) -> Self {
        Self {
            courses,
            instructors,
            rooms,
            current: Schedule::new(),
            preserve_locked: false,
        }
    }

    /// Sets the schedule being replaced.
    pub fn with_current_schedule(mut self, current: Schedule) -> Self {
        self.current = current;
        self
    }

    /// Chooses whether locked sessions survive.
    pub fn preserve_locked(mut self, preserve: bool) -> Self {
        self.preserve_locked = preserve;
        self
    }
}

/// Why a task could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureReason {
    /// No qualified instructor has load left.
    NoInstructor,
    /// No room of the required type exists.
    NoRoom,
    /// Every instructor/room/slot combination was taken or forbidden.
    NoTime,
}

/// A task the engine gave up on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementFailure {
    pub course_id: String,
    pub course_code: String,
    pub session_type: SessionType,
    pub consecutive: bool,
    pub reason: FailureReason,
}

/// Result of one regeneration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    /// Locked sessions followed by newly placed ones.
    pub schedule: Schedule,
    pub failures: Vec<PlacementFailure>,
}

impl PlacementOutcome {
    /// Whether every task was placed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    /// Failures with a given reason.
    pub fn failures_with(&self, reason: FailureReason) -> impl Iterator<Item = &PlacementFailure> {
        self.failures.iter().filter(move |f| f.reason == reason)
    }
}

/// Working state of a single regeneration call.
struct SolveState {
    schedule: Schedule,
    load: HashMap<String, f64>,
    failures: Vec<PlacementFailure>,
}

impl SolveState {
    fn load_of(&self, instructor_id: &str) -> f64 {
        self.load.get(instructor_id).copied().unwrap_or(0.0)
    }

    fn add_load(&mut self, instructor_id: &str, hours: f64) {
        *self.load.entry(instructor_id.to_string()).or_insert(0.0) += hours;
    }

    fn fail(&mut self, course: &Course, task: &PlacementTask, reason: FailureReason) {
        debug!(
            course = %course.code,
            session_type = %task.session_type,
            ?reason,
            "task not placed"
        );
        self.failures.push(PlacementFailure {
            course_id: course.id.clone(),
            course_code: course.code.clone(),
            session_type: task.session_type,
            consecutive: task.consecutive,
            reason,
        });
    }
}

/// Greedy randomized timetable builder.
///
/// Randomness only breaks ties, so repeated runs on the same input give
/// different but equally valid layouts. Pass a seeded generator to
/// [`PlacementEngine::generate_with_rng`] for reproducible output.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_timetable::models::{Course, Instructor, Room};
/// use u_timetable::scheduler::{PlacementEngine, PlacementRequest};
///
/// let courses = vec![Course::new("c1", "CS101").with_lecture(1.67).with_section(0.83)];
/// let instructors = vec![Instructor::lecturer("i1").with_course("c1")];
/// let rooms = vec![Room::lecture_hall("r1"), Room::section_room("r2")];
///
/// let request = PlacementRequest::new(courses, instructors, rooms);
/// let outcome = PlacementEngine::new()
///     .generate_with_rng(&request, &mut StdRng::seed_from_u64(7));
/// assert_eq!(outcome.schedule.session_count(), 3);
/// assert!(outcome.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlacementEngine {
    config: EngineConfig,
}

impl PlacementEngine {
    /// Creates an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the slack allowed above instructor caps.
    pub fn with_load_tolerance(mut self, hours: f64) -> Self {
        self.config.load_tolerance_hours = hours;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Regenerates using the thread-local generator.
    pub fn generate(&self, request: &PlacementRequest) -> PlacementOutcome {
        self.generate_with_rng(request, &mut rand::rng())
    }

    /// Regenerates using the supplied generator.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        request: &PlacementRequest,
        rng: &mut R,
    ) -> PlacementOutcome {
        let seed = if request.preserve_locked {
            request.current.locked_sessions()
        } else {
            Vec::new()
        };

        let mut state = SolveState {
            schedule: Schedule::new(),
            load: HashMap::new(),
            failures: Vec::new(),
        };
        for session in seed {
            if request.instructors.iter().any(|i| i.id == session.instructor_id) {
                state.add_load(&session.instructor_id, self.config.single_load_hours);
            }
            state.schedule.add_session(session);
        }

        let tasks = uncovered_tasks(decompose_all(&request.courses), &state.schedule);
        let tasks = order_tasks(tasks, rng);
        let kept = state.schedule.session_count();

        info!(
            tasks = tasks.len(),
            locked = kept,
            preserve_locked = request.preserve_locked,
            "placement started"
        );

        for task in &tasks {
            let Some(course) = request.courses.iter().find(|c| c.id == task.course_id) else {
                continue;
            };
            self.place_task(task, course, request, &mut state, rng);
        }

        info!(
            placed = state.schedule.session_count() - kept,
            failed = state.failures.len(),
            "placement finished"
        );

        PlacementOutcome {
            schedule: state.schedule,
            failures: state.failures,
        }
    }

    fn place_task<R: Rng + ?Sized>(
        &self,
        task: &PlacementTask,
        course: &Course,
        request: &PlacementRequest,
        state: &mut SolveState,
        rng: &mut R,
    ) {
        let needed = self.config.task_load(task.consecutive);
        let tolerance = self.config.load_tolerance_hours;

        let mut instructors: Vec<&Instructor> = request
            .instructors
            .iter()
            .filter(|i| {
                i.can_teach(&course.id)
                    && state.load_of(&i.id) + needed <= i.max_hours_per_week + tolerance
            })
            .collect();
        if instructors.is_empty() {
            state.fail(course, task, FailureReason::NoInstructor);
            return;
        }
        instructors.shuffle(rng);

        let mut rooms: Vec<&Room> = request
            .rooms
            .iter()
            .filter(|r| r.room_type.hosts(task.session_type))
            .collect();
        if rooms.is_empty() {
            state.fail(course, task, FailureReason::NoRoom);
            return;
        }
        rooms.shuffle(rng);

        let days = candidate_days(course, &instructors);
        let mut slots = Slot::grid(&days);
        slots.shuffle(rng);

        for instructor in &instructors {
            for room in &rooms {
                for slot in &slots {
                    let periods = if task.consecutive {
                        let Some(second) = slot.period.double_partner() else {
                            continue;
                        };
                        vec![slot.period, second]
                    } else {
                        vec![slot.period]
                    };

                    let free = periods
                        .iter()
                        .all(|&p| slot_is_valid(&state.schedule, instructor, room, slot.day, p));
                    if !free {
                        continue;
                    }

                    for &period in &periods {
                        let session = Session::new(
                            new_session_id(rng),
                            &course.id,
                            &instructor.id,
                            task.session_type,
                            slot.day,
                            period,
                        )
                        .with_room(&room.id);
                        state.schedule.add_session(session);
                    }
                    state.add_load(&instructor.id, needed);
                    debug!(
                        course = %course.code,
                        session_type = %task.session_type,
                        instructor = %instructor.id,
                        room = %room.id,
                        %slot,
                        consecutive = task.consecutive,
                        "task placed"
                    );
                    return;
                }
            }
        }

        state.fail(course, task, FailureReason::NoTime);
    }
}

/// Drops the tasks already satisfied by locked sessions.
///
/// Each single task consumes one locked session of its course and type;
/// a pair consumes two, and is kept when fewer than two remain.
fn uncovered_tasks(tasks: Vec<PlacementTask>, locked: &Schedule) -> Vec<PlacementTask> {
    let mut covered: HashMap<(String, SessionType), usize> = HashMap::new();
    for s in &locked.sessions {
        *covered.entry((s.course_id.clone(), s.session_type)).or_insert(0) += 1;
    }

    let mut remaining = Vec::with_capacity(tasks.len());
    for task in tasks {
        let key = (task.course_id.clone(), task.session_type);
        let available = covered.get_mut(&key).filter(|n| **n > 0);
        match available {
            Some(n) if task.consecutive && *n >= 2 => *n -= 2,
            Some(n) if !task.consecutive => *n -= 1,
            _ => remaining.push(task),
        }
    }
    remaining
}

/// Sorts hardest tasks first, with a random tie-break.
fn order_tasks<R: Rng + ?Sized>(tasks: Vec<PlacementTask>, rng: &mut R) -> Vec<PlacementTask> {
    let mut keyed: Vec<(u32, PlacementTask)> =
        tasks.into_iter().map(|t| (rng.random(), t)).collect();
    keyed.sort_by(|(ka, a), (kb, b)| {
        b.consecutive
            .cmp(&a.consecutive)
            .then(b.session_type.difficulty().cmp(&a.session_type.difficulty()))
            .then(ka.cmp(kb))
    });
    keyed.into_iter().map(|(_, t)| t).collect()
}

/// Restricts to the preferred day when at least one qualified instructor
/// can teach on it.
fn candidate_days(course: &Course, instructors: &[&Instructor]) -> Vec<Day> {
    match course.preferred_day {
        Some(day) if instructors.iter().any(|i| i.is_available_on(day)) => vec![day],
        _ => Day::ALL.to_vec(),
    }
}

fn slot_is_valid(
    schedule: &Schedule,
    instructor: &Instructor,
    room: &Room,
    day: Day,
    period: Period,
) -> bool {
    instructor.is_available_at(day, period)
        && !schedule.is_occupied(day, period, &instructor.id, &room.id)
}

fn new_session_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    uuid::Builder::from_random_bytes(rng.random())
        .into_uuid()
        .to_string()
}
