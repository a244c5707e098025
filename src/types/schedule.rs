use super::{Assignment, CourseId, Section, SectionId, StudentId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata about a solved schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    pub generated_at: String,
    pub algorithm_version: String,
    pub objective_value: f64,
    pub solve_time_ms: u64,
}

impl Default for ScheduleMetadata {
    fn default() -> Self {
        Self {
            generated_at: String::new(),
            algorithm_version: String::new(),
            objective_value: 0.0,
            solve_time_ms: 0,
        }
    }
}

/// The complete solved timetable: the immutable sections together with the
/// (slot, room) placement the solver found for each of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub sections: Vec<Section>,
    pub assignments: Vec<Assignment>,
    pub metadata: ScheduleMetadata,
}

impl Schedule {
    pub fn new(sections: Vec<Section>, assignments: Vec<Assignment>) -> Self {
        Self {
            sections,
            assignments,
            metadata: ScheduleMetadata {
                generated_at: chrono::Utc::now().to_rfc3339(),
                algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
                objective_value: 0.0,
                solve_time_ms: 0,
            },
        }
    }

    pub fn sections_for_course(&self, course_id: &CourseId) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| &s.course_id == course_id)
            .collect()
    }

    pub fn student_sections(&self, student_id: &StudentId) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| s.has_student(student_id))
            .collect()
    }

    pub fn get_section(&self, section_id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == section_id)
    }

    pub fn assignment_for(&self, section_id: &SectionId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| &a.section_id == section_id)
    }

    /// Build a map of section ID to section index for fast lookups.
    pub fn section_index_map(&self) -> HashMap<&SectionId, usize> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, s)| (&s.id, i))
            .collect()
    }

    pub fn total_assignments(&self) -> usize {
        self.assignments.len()
    }
}
