use super::{Course, Room, ScheduleConfig, Student, Teacher};
use serde::{Deserialize, Serialize};

/// The raw, validated input dataset: the courses, teachers, rooms and
/// students that feed the section builder, plus the policy config that
/// governs section sizing, daily caps, the solver's time budget, and
/// restricted slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub courses: Vec<Course>,
    pub teachers: Vec<Teacher>,
    pub rooms: Vec<Room>,
    pub students: Vec<Student>,
    #[serde(default)]
    pub config: ScheduleConfig,
}
