use super::CourseId;
use serde::{Deserialize, Serialize};

/// A course offered in the catalogue. Courses carry no attributes beyond
/// their identity: enrolment, ownership, and meeting-size policy all live
/// on the entities that reference a course (students, teachers, the
/// section-size config), not on the course itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
}

impl Course {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: CourseId(id.into()),
        }
    }
}
