use crate::error::Result;
use crate::types::{Course, CourseId, Room, ScheduleInput, Student, Teacher};
use std::collections::{HashMap, HashSet};

/// Collected structural problems found by [`validate_input`]. Distinct from
/// the `InvalidInput` error the section builder itself can raise (no
/// owning teacher) — this pass runs first and catches the cheaper dataset
/// problems (duplicate identities, dangling references) before a course
/// ever reaches the section builder.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }
}

/// Structural `InvalidInput` checks over the whole dataset: duplicate
/// identities, students referencing courses that don't exist, and courses
/// with zero or more than one owning teacher.
pub fn validate_input(input: &ScheduleInput) -> Result<ValidationResult> {
    let mut result = ValidationResult::default();

    check_duplicate_course_ids(&input.courses, &mut result);
    check_duplicate_teacher_ids(&input.teachers, &mut result);
    check_duplicate_room_ids(&input.rooms, &mut result);
    check_duplicate_student_ids(&input.students, &mut result);

    let course_ids: HashSet<&CourseId> = input.courses.iter().map(|c| &c.id).collect();
    for student in &input.students {
        for course_id in &student.enrolled_courses {
            if !course_ids.contains(course_id) {
                result.add_error(format!(
                    "Student '{}' references unknown course '{}'",
                    student.id, course_id
                ));
            }
        }
    }

    let owner_counts = count_owners_by_course(&input.teachers);
    for course in &input.courses {
        match owner_counts.get(&course.id) {
            None | Some(0) => {
                result.add_error(format!("Course '{}' has no owning teacher", course.id));
            }
            Some(n) if *n > 1 => {
                result.add_error(format!(
                    "Course '{}' is owned by {} teachers, expected exactly one",
                    course.id, n
                ));
            }
            _ => {}
        }
    }

    if input.rooms.is_empty() {
        result.add_warning("No rooms defined".to_string());
    }

    let max_room_capacity = input.rooms.iter().map(|r| r.capacity).max().unwrap_or(0);
    if max_room_capacity == 0 && !input.courses.is_empty() {
        result.add_warning("No room has nonzero capacity".to_string());
    }

    if !result.is_valid() {
        return Err(anyhow::anyhow!(
            "Validation failed with {} errors:\n{}",
            result.errors.len(),
            result.errors.join("\n")
        ));
    }

    Ok(result)
}

fn count_owners_by_course(teachers: &[Teacher]) -> HashMap<&CourseId, u32> {
    let mut counts: HashMap<&CourseId, u32> = HashMap::new();
    for teacher in teachers {
        for course_id in &teacher.owned_courses {
            *counts.entry(course_id).or_insert(0) += 1;
        }
    }
    counts
}

fn check_duplicate_course_ids(courses: &[Course], result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for course in courses {
        if !seen.insert(&course.id) {
            result.add_error(format!("Duplicate course id: '{}'", course.id));
        }
    }
}

fn check_duplicate_teacher_ids(teachers: &[Teacher], result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for teacher in teachers {
        if !seen.insert(&teacher.id) {
            result.add_error(format!("Duplicate teacher id: '{}'", teacher.id));
        }
    }
}

fn check_duplicate_room_ids(rooms: &[Room], result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for room in rooms {
        if !seen.insert(&room.id) {
            result.add_error(format!("Duplicate room id: '{}'", room.id));
        }
    }
}

fn check_duplicate_student_ids(students: &[Student], result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for student in students {
        if !seen.insert(&student.id) {
            result.add_error(format!("Duplicate student id: '{}'", student.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CourseId, ScheduleConfig, StudentId, TeacherId};
    use std::collections::BTreeSet;

    fn input_with(courses: Vec<Course>, teachers: Vec<Teacher>, students: Vec<Student>) -> ScheduleInput {
        ScheduleInput {
            courses,
            teachers,
            rooms: vec![Room::new("r1", 30)],
            students,
            config: ScheduleConfig::default(),
        }
    }

    #[test]
    fn rejects_course_without_owner() {
        let input = input_with(vec![Course::new("math")], vec![], vec![]);
        assert!(validate_input(&input).is_err());
    }

    #[test]
    fn rejects_unknown_course_reference() {
        let teacher = Teacher {
            id: TeacherId("t1".to_string()),
            owned_courses: BTreeSet::from([CourseId("math".to_string())]),
            unavailable: BTreeSet::new(),
        };
        let student = Student {
            id: StudentId("s1".to_string()),
            enrolled_courses: BTreeSet::from([CourseId("physics".to_string())]),
        };
        let input = input_with(vec![Course::new("math")], vec![teacher], vec![student]);
        assert!(validate_input(&input).is_err());
    }

    #[test]
    fn accepts_well_formed_input() {
        let teacher = Teacher {
            id: TeacherId("t1".to_string()),
            owned_courses: BTreeSet::from([CourseId("math".to_string())]),
            unavailable: BTreeSet::new(),
        };
        let student = Student {
            id: StudentId("s1".to_string()),
            enrolled_courses: BTreeSet::from([CourseId("math".to_string())]),
        };
        let input = input_with(vec![Course::new("math")], vec![teacher], vec![student]);
        assert!(validate_input(&input).unwrap().is_valid());
    }
}
