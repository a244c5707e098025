use serde::{Deserialize, Serialize};

/// Number of scheduling days in the fixed weekly grid.
pub const DAYS_PER_WEEK: u32 = 5;
/// Number of time windows per day in the fixed weekly grid.
pub const SLOTS_PER_DAY: u32 = 5;
/// Total number of slots in the fixed weekly grid (5 days * 5 slots/day).
pub const TOTAL_SLOTS: u32 = DAYS_PER_WEEK * SLOTS_PER_DAY;

const DAY_NAMES: [&str; DAYS_PER_WEEK as usize] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"];

const TIME_RANGES: [&str; SLOTS_PER_DAY as usize] = [
    "08:00-10:00",
    "10:00-12:00",
    "12:00-14:00",
    "14:00-16:00",
    "16:00-18:00",
];

/// A 1-based index into the fixed weekly slot grid, in `[1, TOTAL_SLOTS]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u32);

impl SlotId {
    /// Builds a slot from a 0-based day index and a 0-based intra-day index.
    pub fn from_day_intra(day: u32, intra: u32) -> Self {
        SlotId(day * SLOTS_PER_DAY + intra + 1)
    }

    /// 0-based day index, or `None` if out of the fixed grid's range.
    pub fn day_index(&self) -> Option<u32> {
        if self.0 == 0 || self.0 > TOTAL_SLOTS {
            None
        } else {
            Some((self.0 - 1) / SLOTS_PER_DAY)
        }
    }

    /// 0-based intra-day index, or `None` if out of the fixed grid's range.
    pub fn intra_day_index(&self) -> Option<u32> {
        if self.0 == 0 || self.0 > TOTAL_SLOTS {
            None
        } else {
            Some((self.0 - 1) % SLOTS_PER_DAY)
        }
    }

    /// Decodes this slot into (day name, time-of-day range). Out-of-range
    /// slot numbers decode to a sentinel pair rather than failing.
    pub fn decode(&self) -> (&'static str, &'static str) {
        match (self.day_index(), self.intra_day_index()) {
            (Some(d), Some(k)) => (DAY_NAMES[d as usize], TIME_RANGES[k as usize]),
            _ => ("Unknown Day", "Unknown Time"),
        }
    }

    /// All slot ids in the fixed grid, in order.
    pub fn all() -> impl Iterator<Item = SlotId> {
        (1..=TOTAL_SLOTS).map(SlotId)
    }

    /// Inverse of [`SlotId::decode`]: reconstructs a slot id from the
    /// (day name, time range) strings `decode` produces, for re-reading a
    /// previously written report. `None` if either string isn't part of
    /// the fixed grid.
    pub fn from_day_and_time(day_name: &str, time_range: &str) -> Option<SlotId> {
        let day = DAY_NAMES.iter().position(|d| *d == day_name)? as u32;
        let intra = TIME_RANGES.iter().position(|t| *t == time_range)? as u32;
        Some(SlotId::from_day_intra(day, intra))
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot{}", self.0)
    }
}
