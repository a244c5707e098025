use super::{CourseId, StudentId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A student enrolled in a fixed set of courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub enrolled_courses: BTreeSet<CourseId>,
}

impl Student {
    pub fn is_enrolled_in(&self, course_id: &CourseId) -> bool {
        self.enrolled_courses.contains(course_id)
    }
}
