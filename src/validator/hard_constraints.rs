use crate::types::{Assignment, ScheduleConfig, Section, Teacher};
use std::collections::{HashMap, HashSet};

/// A single violated invariant, produced by one of the checks below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub invariant: &'static str,
    pub message: String,
}

fn assignment_lookup<'a>(
    sections: &'a [Section],
    assignments: &'a [Assignment],
) -> HashMap<&'a str, (&'a Section, &'a Assignment)> {
    sections
        .iter()
        .filter_map(|section| {
            assignments
                .iter()
                .find(|a| a.section_id == section.id)
                .map(|a| (section.id.0.as_str(), (section, a)))
        })
        .collect()
}

/// P1: no teacher is double-booked across two sections at the same slot.
pub fn check_teacher_conflicts(sections: &[Section], assignments: &[Assignment]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut teacher_slots: HashMap<&str, HashSet<u32>> = HashMap::new();
    let by_section = assignment_lookup(sections, assignments);

    for section in sections {
        let Some((_, assignment)) = by_section.get(section.id.0.as_str()) else {
            continue;
        };
        let slots = teacher_slots.entry(section.teacher_id.0.as_str()).or_default();
        if !slots.insert(assignment.slot.0) {
            violations.push(Violation {
                invariant: "P1-no-teacher-clash",
                message: format!(
                    "teacher '{}' is double-booked at slot {}",
                    section.teacher_id, assignment.slot.0
                ),
            });
        }
    }
    violations
}

/// P2: no student is double-booked across two sections at the same slot.
pub fn check_student_conflicts(sections: &[Section], assignments: &[Assignment]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut student_slots: HashMap<&str, HashSet<u32>> = HashMap::new();
    let by_section = assignment_lookup(sections, assignments);

    for section in sections {
        let Some((_, assignment)) = by_section.get(section.id.0.as_str()) else {
            continue;
        };
        for student in &section.students {
            let slots = student_slots.entry(student.0.as_str()).or_default();
            if !slots.insert(assignment.slot.0) {
                violations.push(Violation {
                    invariant: "P2-no-student-clash",
                    message: format!(
                        "student '{}' is double-booked at slot {}",
                        student, assignment.slot.0
                    ),
                });
            }
        }
    }
    violations
}

/// P3: no (slot, room) pair hosts two sections at once.
pub fn check_room_conflicts(sections: &[Section], assignments: &[Assignment]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen: HashSet<(u32, &str)> = HashSet::new();
    let by_section = assignment_lookup(sections, assignments);

    for section in sections {
        let Some((_, assignment)) = by_section.get(section.id.0.as_str()) else {
            continue;
        };
        let key = (assignment.slot.0, assignment.room_id.0.as_str());
        if !seen.insert(key) {
            violations.push(Violation {
                invariant: "P3-no-room-clash",
                message: format!(
                    "room '{}' is double-booked at slot {}",
                    assignment.room_id, assignment.slot.0
                ),
            });
        }
    }
    violations
}

/// P4: every section fits in the capacity of its assigned room.
pub fn check_capacity_violations(
    sections: &[Section],
    assignments: &[Assignment],
    rooms: &[crate::types::Room],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let by_section = assignment_lookup(sections, assignments);

    for section in sections {
        let Some((_, assignment)) = by_section.get(section.id.0.as_str()) else {
            continue;
        };
        if let Some(room) = rooms.iter().find(|r| r.id == assignment.room_id) {
            if !room.fits(section.enrollment()) {
                violations.push(Violation {
                    invariant: "P4-capacity",
                    message: format!(
                        "section '{}' has {} students but room '{}' holds {}",
                        section.id,
                        section.enrollment(),
                        room.id,
                        room.capacity
                    ),
                });
            }
        }
    }
    violations
}

/// P5: no section meets during its teacher's unavailable slots.
pub fn check_teacher_availability(
    sections: &[Section],
    assignments: &[Assignment],
    teachers: &[Teacher],
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let by_section = assignment_lookup(sections, assignments);

    for section in sections {
        let Some((_, assignment)) = by_section.get(section.id.0.as_str()) else {
            continue;
        };
        if let Some(teacher) = teachers.iter().find(|t| t.id == section.teacher_id) {
            if !teacher.is_available(assignment.slot) {
                violations.push(Violation {
                    invariant: "P5-teacher-availability",
                    message: format!(
                        "section '{}' scheduled in teacher '{}''s forbidden slot {}",
                        section.id, teacher.id, assignment.slot.0
                    ),
                });
            }
        }
    }
    violations
}

/// P6: no section meets in a globally restricted slot.
pub fn check_restricted_slots(
    sections: &[Section],
    assignments: &[Assignment],
    config: &ScheduleConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let by_section = assignment_lookup(sections, assignments);

    for section in sections {
        let Some((_, assignment)) = by_section.get(section.id.0.as_str()) else {
            continue;
        };
        if config.restricted_slots.contains(&assignment.slot) {
            violations.push(Violation {
                invariant: "P6-restricted-slot",
                message: format!(
                    "section '{}' scheduled in restricted slot {}",
                    section.id, assignment.slot.0
                ),
            });
        }
    }
    violations
}

/// P7: no teacher exceeds the per-day session cap.
pub fn check_daily_cap(
    sections: &[Section],
    assignments: &[Assignment],
    config: &ScheduleConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut counts: HashMap<(&str, u32), u32> = HashMap::new();
    let by_section = assignment_lookup(sections, assignments);

    for section in sections {
        let Some((_, assignment)) = by_section.get(section.id.0.as_str()) else {
            continue;
        };
        let Some(day) = assignment.slot.day_index() else {
            continue;
        };
        let count = counts.entry((section.teacher_id.0.as_str(), day)).or_insert(0);
        *count += 1;
        if *count > config.max_sessions_per_day {
            violations.push(Violation {
                invariant: "P7-teacher-daily-cap",
                message: format!(
                    "teacher '{}' has {} sessions on day {}, exceeding the cap of {}",
                    section.teacher_id, count, day, config.max_sessions_per_day
                ),
            });
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Assignment, CourseId, RoomId, SectionId, SlotId, StudentId, TeacherId};

    fn section(id: &str, teacher: &str, students: &[&str]) -> Section {
        Section::new(
            SectionId(id.to_string()),
            CourseId("c".to_string()),
            TeacherId(teacher.to_string()),
            students.iter().map(|s| StudentId(s.to_string())).collect(),
        )
    }

    fn assignment(id: &str, slot: u32, room: &str) -> Assignment {
        Assignment::new(SectionId(id.to_string()), SlotId(slot), RoomId(room.to_string()))
    }

    #[test]
    fn detects_teacher_clash() {
        let sections = vec![section("a", "t1", &[]), section("b", "t1", &[])];
        let assignments = vec![assignment("a", 1, "r1"), assignment("b", 1, "r2")];
        assert!(!check_teacher_conflicts(&sections, &assignments).is_empty());
    }

    #[test]
    fn detects_student_clash() {
        let sections = vec![section("a", "t1", &["s1"]), section("b", "t2", &["s1"])];
        let assignments = vec![assignment("a", 1, "r1"), assignment("b", 1, "r2")];
        assert!(!check_student_conflicts(&sections, &assignments).is_empty());
    }

    #[test]
    fn detects_room_clash() {
        let sections = vec![section("a", "t1", &[]), section("b", "t2", &[])];
        let assignments = vec![assignment("a", 1, "r1"), assignment("b", 1, "r1")];
        assert!(!check_room_conflicts(&sections, &assignments).is_empty());
    }

    #[test]
    fn passes_clean_schedule() {
        let sections = vec![section("a", "t1", &["s1"]), section("b", "t2", &["s2"])];
        let assignments = vec![assignment("a", 1, "r1"), assignment("b", 2, "r1")];
        assert!(check_teacher_conflicts(&sections, &assignments).is_empty());
        assert!(check_student_conflicts(&sections, &assignments).is_empty());
        assert!(check_room_conflicts(&sections, &assignments).is_empty());
    }
}
