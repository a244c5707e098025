use class_timetable_solver::scheduler::{build_sections, check_feasibility, solve_schedule};
use class_timetable_solver::types::{
    Course, Room, ScheduleConfig, SlotId, Student, StudentId, Teacher, TeacherId, TOTAL_SLOTS,
};
use class_timetable_solver::validator::validate_full;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn small_instance(
    num_courses: usize,
    students_per_course: usize,
) -> (Vec<Course>, Vec<Teacher>, Vec<Student>, Vec<Room>) {
    let courses: Vec<Course> = (0..num_courses)
        .map(|i| Course::new(format!("c{i}")))
        .collect();
    let teachers: Vec<Teacher> = courses
        .iter()
        .enumerate()
        .map(|(i, c)| Teacher {
            id: TeacherId(format!("t{i}")),
            owned_courses: BTreeSet::from([c.id.clone()]),
            unavailable: BTreeSet::new(),
        })
        .collect();
    let mut students = Vec::new();
    for (i, course) in courses.iter().enumerate() {
        for j in 0..students_per_course {
            students.push(Student {
                id: StudentId(format!("s{i}_{j}")),
                enrolled_courses: BTreeSet::from([course.id.clone()]),
            });
        }
    }
    let rooms = vec![Room::new("r0", 30), Room::new("r1", 30)];
    (courses, teachers, students, rooms)
}

proptest! {
    /// P8: section count law. Section count per course equals
    /// ceil(enrolment / max_section_size).
    #[test]
    fn section_count_matches_enrolment_law(
        num_courses in 1usize..4,
        students_per_course in 0usize..35,
        max_section_size in 1u32..15,
    ) {
        let (courses, teachers, students, _rooms) = small_instance(num_courses, students_per_course);
        let sections = build_sections(&courses, &teachers, &students, max_section_size).unwrap();

        for course in &courses {
            let expected = (students_per_course as u32).div_ceil(max_section_size);
            let actual = sections.iter().filter(|s| s.course_id == course.id).count() as u32;
            prop_assert_eq!(actual, expected);
        }
    }

    /// P9: determinism. The same input always produces byte-identical
    /// section ids in the same order.
    #[test]
    fn section_building_is_deterministic(
        num_courses in 1usize..4,
        students_per_course in 0usize..20,
    ) {
        let (courses, teachers, students, _rooms) = small_instance(num_courses, students_per_course);

        let a = build_sections(&courses, &teachers, &students, 30).unwrap();
        let b = build_sections(&courses, &teachers, &students, 30).unwrap();

        let ids_a: Vec<_> = a.iter().map(|s| s.id.0.clone()).collect();
        let ids_b: Vec<_> = b.iter().map(|s| s.id.0.clone()).collect();
        prop_assert_eq!(ids_a, ids_b);
    }
}

/// P1-P7 over a handful of small, deliberately feasible instances: solve
/// and then run the full independent validator pass over the result.
#[test]
fn solved_tiny_instances_have_no_violations() {
    for (num_courses, students_per_course) in [(1, 1), (2, 3), (1, 5)] {
        let (courses, teachers, students, rooms) = small_instance(num_courses, students_per_course);
        let config = ScheduleConfig::default();
        let sections = build_sections(&courses, &teachers, &students, config.max_section_size).unwrap();

        let all_slots: Vec<SlotId> = SlotId::all().collect();
        assert_eq!(all_slots.len() as u32, TOTAL_SLOTS);
        check_feasibility(&sections, &rooms, &all_slots, config.max_sessions_per_day).unwrap();

        let result = solve_schedule(&sections, &rooms, &teachers, &config).unwrap();
        let violations = validate_full(&sections, &result.assignments, &rooms, &teachers, &config);
        assert!(violations.is_empty(), "unexpected violations: {violations:?}");
    }
}
