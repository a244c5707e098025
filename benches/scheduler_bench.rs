use class_timetable_solver::scheduler::{build_sections, solve_schedule};
use class_timetable_solver::types::{Course, Room, ScheduleConfig, Student, StudentId, Teacher, TeacherId};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::BTreeSet;

fn synthetic_dataset(num_courses: usize, students_per_course: usize) -> (Vec<Course>, Vec<Teacher>, Vec<Student>, Vec<Room>) {
    let courses: Vec<Course> = (0..num_courses)
        .map(|i| Course::new(format!("course{i}")))
        .collect();

    let teachers: Vec<Teacher> = courses
        .iter()
        .enumerate()
        .map(|(i, c)| Teacher {
            id: TeacherId(format!("teacher{i}")),
            owned_courses: BTreeSet::from([c.id.clone()]),
            unavailable: BTreeSet::new(),
        })
        .collect();

    let mut students = Vec::new();
    for (i, course) in courses.iter().enumerate() {
        for j in 0..students_per_course {
            students.push(Student {
                id: StudentId(format!("student{i}_{j}")),
                enrolled_courses: BTreeSet::from([course.id.clone()]),
            });
        }
    }

    let rooms: Vec<Room> = (0..5).map(|i| Room::new(format!("room{i}"), 30)).collect();

    (courses, teachers, students, rooms)
}

fn bench_section_builder(c: &mut Criterion) {
    let (courses, teachers, students, _rooms) = synthetic_dataset(5, 40);

    c.bench_function("build_sections/5_courses_40_students", |b| {
        b.iter(|| {
            build_sections(
                black_box(&courses),
                black_box(&teachers),
                black_box(&students),
                30,
            )
            .unwrap()
        })
    });
}

fn bench_solver(c: &mut Criterion) {
    let (courses, teachers, students, rooms) = synthetic_dataset(4, 10);
    let sections = build_sections(&courses, &teachers, &students, 30).unwrap();
    let config = ScheduleConfig::default();

    c.bench_function("solve_schedule/4_sections", |b| {
        b.iter(|| {
            solve_schedule(
                black_box(&sections),
                black_box(&rooms),
                black_box(&teachers),
                black_box(&config),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_section_builder, bench_solver);
criterion_main!(benches);
