use super::{CourseId, SectionId, StudentId, TeacherId};
use serde::{Deserialize, Serialize};

/// A concrete offering of a course, built deterministically by the section
/// builder from a block partition of a course's enrolment. Sections are
/// immutable once built — (slot, room) placement is produced separately by
/// the solver and recorded in an [`Assignment`](super::Assignment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub course_id: CourseId,
    pub teacher_id: TeacherId,
    pub students: Vec<StudentId>,
}

impl Section {
    pub fn new(
        id: SectionId,
        course_id: CourseId,
        teacher_id: TeacherId,
        students: Vec<StudentId>,
    ) -> Self {
        Self {
            id,
            course_id,
            teacher_id,
            students,
        }
    }

    pub fn enrollment(&self) -> usize {
        self.students.len()
    }

    pub fn has_student(&self, student_id: &StudentId) -> bool {
        self.students.contains(student_id)
    }
}
