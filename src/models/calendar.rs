//! Weekly calendar model.
//!
//! The teaching week has six days (Monday to Saturday) and each day has
//! seven fixed periods of 50 minutes:
//!
//! | Period | Time | Block |
//! |--------|------|-------|
//! | P1A | 09:00 - 09:50 | 1 |
//! | P1B | 09:50 - 10:40 | 1 |
//! | P2A | 10:40 - 11:30 | 2 |
//! | P2B | 11:30 - 12:20 | 2 |
//! | Break | 12:20 - 13:10 | midday |
//! | P3A | 13:10 - 14:00 | 3 |
//! | P3B | 14:00 - 14:50 | 3 |
//!
//! A double period (consecutive pair) always starts on the `A` half of one
//! of the three blocks and never touches the break.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// All six days of the teaching week, in calendar order.
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A 50-minute teaching period within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Period {
    P1A,
    P1B,
    P2A,
    P2B,
    /// Midday break. Only break-eligible instructors may teach here.
    Break,
    P3A,
    P3B,
}

impl Period {
    /// All periods in the order they occur during the day.
    pub const SEQUENCE: [Period; 7] = [
        Period::P1A,
        Period::P1B,
        Period::P2A,
        Period::P2B,
        Period::Break,
        Period::P3A,
        Period::P3B,
    ];

    /// Whether this is the midday break.
    #[inline]
    pub fn is_break(self) -> bool {
        self == Period::Break
    }

    /// The period immediately following this one, if any.
    pub fn next(self) -> Option<Period> {
        let idx = Self::SEQUENCE.iter().position(|&p| p == self)?;
        Self::SEQUENCE.get(idx + 1).copied()
    }

    /// Whether a double period may start here.
    #[inline]
    pub fn is_double_start(self) -> bool {
        matches!(self, Period::P1A | Period::P2A | Period::P3A)
    }

    /// Second half of the double period starting at `self`.
    ///
    /// Returns `None` when `self` is not a block start, or when the pair
    /// would enter or leave the break.
    pub fn double_partner(self) -> Option<Period> {
        if !self.is_double_start() || self.is_break() {
            return None;
        }
        self.next().filter(|p| !p.is_break())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A (day, period) cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    pub period: Period,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(day: Day, period: Period) -> Self {
        Self { day, period }
    }

    /// Every slot on the given days, day-major.
    pub fn grid(days: &[Day]) -> Vec<Slot> {
        days.iter()
            .flat_map(|&day| Period::SEQUENCE.iter().map(move |&period| Slot::new(day, period)))
            .collect()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_sequence_next() {
        assert_eq!(Period::P1A.next(), Some(Period::P1B));
        assert_eq!(Period::P2B.next(), Some(Period::Break));
        assert_eq!(Period::Break.next(), Some(Period::P3A));
        assert_eq!(Period::P3B.next(), None);
    }

    #[test]
    fn test_double_partner() {
        assert_eq!(Period::P1A.double_partner(), Some(Period::P1B));
        assert_eq!(Period::P2A.double_partner(), Some(Period::P2B));
        assert_eq!(Period::P3A.double_partner(), Some(Period::P3B));
        // Not block starts
        assert_eq!(Period::P1B.double_partner(), None);
        assert_eq!(Period::P2B.double_partner(), None);
        assert_eq!(Period::Break.double_partner(), None);
    }

    #[test]
    fn test_grid_size() {
        assert_eq!(Slot::grid(&Day::ALL).len(), 42);
        let single = Slot::grid(&[Day::Tuesday]);
        assert_eq!(single.len(), 7);
        assert!(single.iter().all(|s| s.day == Day::Tuesday));
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(Slot::new(Day::Monday, Period::Break).to_string(), "Monday Break");
    }
}
