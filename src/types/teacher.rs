use super::{CourseId, SlotId, TeacherId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A teacher who owns a fixed set of courses and is unavailable during a
/// fixed set of slots. Every course has exactly one owning teacher; a
/// teacher may own more than one course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    /// Courses this teacher owns and is the sole instructor for.
    pub owned_courses: BTreeSet<CourseId>,
    /// Slots this teacher cannot be scheduled into.
    #[serde(default)]
    pub unavailable: BTreeSet<SlotId>,
}

impl Teacher {
    /// Whether this teacher owns the given course.
    pub fn owns(&self, course_id: &CourseId) -> bool {
        self.owned_courses.contains(course_id)
    }

    /// Whether this teacher can be scheduled into the given slot.
    pub fn is_available(&self, slot: SlotId) -> bool {
        !self.unavailable.contains(&slot)
    }
}
