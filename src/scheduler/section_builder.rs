use crate::error::{Result, SchedulerError};
use crate::types::{Course, CourseId, Section, SectionId, Student, Teacher, TeacherId};
use std::collections::BTreeMap;

/// Phase 1: deterministically explode course enrolments into bounded-size
/// sections.
///
/// For each course, in catalogue order, the students enrolled in it (in
/// input order) are block-partitioned into sections of at most
/// `max_section_size`; the last section of a course may be smaller. Section
/// ids follow `<course>_S<k>` with 1-based `k`. The same input always
/// produces the same section list.
pub fn build_sections(
    courses: &[Course],
    teachers: &[Teacher],
    students: &[Student],
    max_section_size: u32,
) -> Result<Vec<Section>> {
    let owner_by_course = owning_teacher_by_course(teachers)?;

    let mut students_by_course: BTreeMap<&CourseId, Vec<&Student>> = BTreeMap::new();
    for student in students {
        for course_id in &student.enrolled_courses {
            students_by_course.entry(course_id).or_default().push(student);
        }
    }

    let mut sections = Vec::new();
    for course in courses {
        let teacher_id = owner_by_course
            .get(&course.id)
            .cloned()
            .ok_or_else(|| SchedulerError::NoOwningTeacher {
                course_id: course.id.0.clone(),
            })?;

        let enrolled = students_by_course
            .get(&course.id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let block_size = max_section_size.max(1) as usize;
        let chunks: Vec<&[&Student]> = if enrolled.is_empty() {
            Vec::new()
        } else {
            enrolled.chunks(block_size).collect()
        };

        for (k, chunk) in chunks.into_iter().enumerate() {
            let id = SectionId(format!("{}_S{}", course.id.0, k + 1));
            let roster = chunk.iter().map(|s| s.id.clone()).collect();
            sections.push(Section::new(id, course.id.clone(), teacher_id.clone(), roster));
        }
    }

    Ok(sections)
}

fn owning_teacher_by_course(teachers: &[Teacher]) -> Result<BTreeMap<&CourseId, TeacherId>> {
    let mut map: BTreeMap<&CourseId, TeacherId> = BTreeMap::new();
    for teacher in teachers {
        for course_id in &teacher.owned_courses {
            if let Some(existing) = map.get(course_id) {
                return Err(SchedulerError::MultipleOwners {
                    course_id: course_id.0.clone(),
                    first: existing.0.clone(),
                    second: teacher.id.0.clone(),
                }
                .into());
            }
            map.insert(course_id, teacher.id.clone());
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StudentId;
    use std::collections::BTreeSet;

    fn teacher(id: &str, courses: &[&str]) -> Teacher {
        Teacher {
            id: TeacherId(id.to_string()),
            owned_courses: courses.iter().map(|c| CourseId(c.to_string())).collect(),
            unavailable: BTreeSet::new(),
        }
    }

    fn student(id: &str, courses: &[&str]) -> Student {
        Student {
            id: StudentId(id.to_string()),
            enrolled_courses: courses.iter().map(|c| CourseId(c.to_string())).collect(),
        }
    }

    #[test]
    fn splits_enrolment_into_bounded_sections() {
        let courses = vec![Course::new("math")];
        let teachers = vec![teacher("t1", &["math"])];
        let students: Vec<Student> = (0..65)
            .map(|i| student(&format!("s{i}"), &["math"]))
            .collect();

        let sections = build_sections(&courses, &teachers, &students, 30).unwrap();

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].id, SectionId("math_S1".to_string()));
        assert_eq!(sections[0].enrollment(), 30);
        assert_eq!(sections[1].enrollment(), 30);
        assert_eq!(sections[2].enrollment(), 5);
    }

    #[test]
    fn rejects_course_with_no_owning_teacher() {
        let courses = vec![Course::new("math")];
        let teachers: Vec<Teacher> = vec![];
        let students: Vec<Student> = vec![];

        let err = build_sections(&courses, &teachers, &students, 30).unwrap_err();
        assert!(err.to_string().contains("no owning teacher"));
    }

    #[test]
    fn is_deterministic() {
        let courses = vec![Course::new("math"), Course::new("eng")];
        let teachers = vec![teacher("t1", &["math"]), teacher("t2", &["eng"])];
        let students = vec![
            student("s1", &["math", "eng"]),
            student("s2", &["math"]),
            student("s3", &["eng"]),
        ];

        let a = build_sections(&courses, &teachers, &students, 30).unwrap();
        let b = build_sections(&courses, &teachers, &students, 30).unwrap();

        let ids_a: Vec<_> = a.iter().map(|s| s.id.0.clone()).collect();
        let ids_b: Vec<_> = b.iter().map(|s| s.id.0.clone()).collect();
        assert_eq!(ids_a, ids_b);
    }
}
