use crate::error::{Result, SchedulerError};
use crate::types::{
    Assignment, CourseId, Room, RoomId, ScheduleConfig, Section, SectionId, SlotId, StudentId,
    Teacher, TeacherId, DAYS_PER_WEEK, TOTAL_SLOTS,
};
use good_lp::solvers::highs::highs;
use good_lp::{constraint, variable, variables, Expression, Solution, SolverModel};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Outcome classification for a solve attempt, mirroring the four ways the
/// solver can conclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Optimal,
    Feasible,
}

/// The result of building and solving the constraint model: the decoded
/// assignment for every section, plus the objective value the solver found.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub assignments: Vec<Assignment>,
    pub status: SolveStatus,
    pub objective_value: f64,
}

/// Builds the assignment-cube constraint model and invokes the underlying
/// MIP solver under a wall-clock budget.
///
/// The model uses one binary decision variable per `(section, slot, room)`
/// triple that isn't already excluded by a capacity, teacher-availability,
/// or global-restriction check; variables for excluded triples are simply
/// never created. Reified booleans, all-different, and element-lookup
/// constraints are all expressed as plain linear expressions over that
/// cube.
pub fn solve_schedule(
    sections: &[Section],
    rooms: &[Room],
    teachers: &[Teacher],
    config: &ScheduleConfig,
) -> Result<SolveResult> {
    let teacher_by_id: HashMap<&TeacherId, &Teacher> =
        teachers.iter().map(|t| (&t.id, t)).collect();
    let restricted: BTreeSet<u32> = config.restricted_slots.iter().map(|s| s.0).collect();

    let mut vars = variables!();
    let mut x: BTreeMap<(usize, u32, usize), good_lp::Variable> = BTreeMap::new();

    for (s_idx, section) in sections.iter().enumerate() {
        let teacher = teacher_by_id.get(&section.teacher_id).copied();
        let enrollment = section.enrollment();

        for slot in 1..=TOTAL_SLOTS {
            if restricted.contains(&slot) {
                continue;
            }
            if let Some(teacher) = teacher {
                if teacher.unavailable.contains(&SlotId(slot)) {
                    continue;
                }
            }
            for (r_idx, room) in rooms.iter().enumerate() {
                if !room.fits(enrollment) {
                    continue;
                }
                x.insert((s_idx, slot, r_idx), vars.add(variable().binary()));
            }
        }

        let has_candidate = x.keys().any(|(si, _, _)| *si == s_idx);
        if !has_candidate {
            return Err(SchedulerError::Infeasible.into());
        }
    }

    // course_on_day[c, d]: a reward variable tied to the schedule only by a
    // one-directional lower-bound implication.
    let mut course_day_keys: BTreeSet<(CourseId, u32)> = BTreeSet::new();
    for section in sections {
        for d in 0..DAYS_PER_WEEK {
            course_day_keys.insert((section.course_id.clone(), d));
        }
    }
    let mut course_on_day: BTreeMap<(CourseId, u32), good_lp::Variable> = BTreeMap::new();
    for key in course_day_keys {
        course_on_day.insert(key, vars.add(variable().binary()));
    }

    // first[u] / last[u]: LP-relaxed min/max of a student's occupied slots.
    let mut students: BTreeSet<StudentId> = BTreeSet::new();
    for section in sections {
        for student in &section.students {
            students.insert(student.clone());
        }
    }
    let mut first: BTreeMap<StudentId, good_lp::Variable> = BTreeMap::new();
    let mut last: BTreeMap<StudentId, good_lp::Variable> = BTreeMap::new();
    for student in &students {
        first.insert(
            student.clone(),
            vars.add(variable().min(1.0).max(TOTAL_SLOTS as f64)),
        );
        last.insert(
            student.clone(),
            vars.add(variable().min(1.0).max(TOTAL_SLOTS as f64)),
        );
    }

    let mut objective = Expression::default();
    for var in course_on_day.values() {
        objective -= *var;
    }
    for student in &students {
        objective += last[student] - first[student];
    }

    let mut problem = vars.minimise(objective).using(highs);
    // Best-effort: bound the solver's wall-clock time. If the installed
    // good_lp/highs adapter exposes this differently, this is the single
    // call site to adjust.
    problem = problem.set_time_limit(config.time_budget_seconds as f64);

    // Hard constraint 1: exactly one (slot, room) per section.
    for s_idx in 0..sections.len() {
        let sum: Expression = x
            .iter()
            .filter(|((si, _, _), _)| *si == s_idx)
            .map(|(_, v)| Expression::from(*v))
            .sum();
        problem = problem.with(constraint!(sum == 1));
    }

    // Hard constraint 2: no teacher double-booking.
    for teacher in teachers {
        for slot in 1..=TOTAL_SLOTS {
            let sum: Expression = sections
                .iter()
                .enumerate()
                .filter(|(_, sec)| sec.teacher_id == teacher.id)
                .flat_map(|(s_idx, _)| {
                    rooms.iter().enumerate().filter_map(move |(r_idx, _)| {
                        x.get(&(s_idx, slot, r_idx)).map(|v| Expression::from(*v))
                    })
                })
                .sum();
            problem = problem.with(constraint!(sum <= 1));
        }
    }

    // Hard constraint 3: no student double-booking.
    for student in &students {
        for slot in 1..=TOTAL_SLOTS {
            let sum: Expression = sections
                .iter()
                .enumerate()
                .filter(|(_, sec)| sec.has_student(student))
                .flat_map(|(s_idx, _)| {
                    rooms.iter().enumerate().filter_map(move |(r_idx, _)| {
                        x.get(&(s_idx, slot, r_idx)).map(|v| Expression::from(*v))
                    })
                })
                .sum();
            problem = problem.with(constraint!(sum <= 1));
        }
    }

    // Hard constraint 4: all-different over (slot, room).
    for slot in 1..=TOTAL_SLOTS {
        for r_idx in 0..rooms.len() {
            let sum: Expression = (0..sections.len())
                .filter_map(|s_idx| x.get(&(s_idx, slot, r_idx)).map(|v| Expression::from(*v)))
                .sum();
            problem = problem.with(constraint!(sum <= 1));
        }
    }

    // Hard constraint 7: per-teacher daily session cap.
    for teacher in teachers {
        for d in 0..DAYS_PER_WEEK {
            let day_slots: Vec<u32> = (1..=TOTAL_SLOTS)
                .filter(|&slot| SlotId(slot).day_index() == Some(d))
                .collect();
            let sum: Expression = sections
                .iter()
                .enumerate()
                .filter(|(_, sec)| sec.teacher_id == teacher.id)
                .flat_map(|(s_idx, _)| {
                    let day_slots = &day_slots;
                    rooms.iter().enumerate().flat_map(move |(r_idx, _)| {
                        day_slots
                            .iter()
                            .filter_map(move |&slot| {
                                x.get(&(s_idx, slot, r_idx)).map(|v| Expression::from(*v))
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .sum();
            problem = problem.with(constraint!(sum <= config.max_sessions_per_day as f64));
        }
    }

    // Soft objective term 1: one-directional day-spread reward (the
    // implication is deliberately one-way; see course_on_day above).
    for (s_idx, section) in sections.iter().enumerate() {
        for d in 0..DAYS_PER_WEEK {
            let day_slots: Vec<u32> = (1..=TOTAL_SLOTS)
                .filter(|&slot| SlotId(slot).day_index() == Some(d))
                .collect();
            let on_day_expr: Expression = rooms
                .iter()
                .enumerate()
                .flat_map(|(r_idx, _)| {
                    let day_slots = &day_slots;
                    day_slots
                        .iter()
                        .filter_map(move |&slot| {
                            x.get(&(s_idx, slot, r_idx)).map(|v| Expression::from(*v))
                        })
                        .collect::<Vec<_>>()
                })
                .sum();
            if let Some(&cod_var) = course_on_day.get(&(section.course_id.clone(), d)) {
                problem = problem.with(constraint!(cod_var >= on_day_expr));
            }
        }
    }

    // Soft objective term 2: student footprint span, via the LP-relaxation
    // min/max trick.
    for (s_idx, section) in sections.iter().enumerate() {
        let slot_value_expr: Expression = x
            .iter()
            .filter(|((si, _, _), _)| *si == s_idx)
            .map(|((_, slot, _), v)| (*slot as f64) * *v)
            .sum();
        for student in &section.students {
            let first_var = first[student];
            let last_var = last[student];
            problem = problem.with(constraint!(first_var <= slot_value_expr.clone()));
            problem = problem.with(constraint!(last_var >= slot_value_expr.clone()));
        }
    }

    let solution = problem.solve().map_err(|e| classify_solve_error(e, config))?;

    let mut assignments = Vec::with_capacity(sections.len());
    for (s_idx, section) in sections.iter().enumerate() {
        let chosen = x
            .iter()
            .find(|((si, _, _), v)| *si == s_idx && solution.value(**v) > 0.5)
            .map(|((_, slot, r_idx), _)| (*slot, *r_idx));

        let (slot, r_idx) = chosen.ok_or_else(|| {
            SchedulerError::SolverBug(format!(
                "section '{}' has no chosen (slot, room) in the solution",
                section.id
            ))
        })?;

        assignments.push(Assignment::new(
            SectionId(section.id.0.clone()),
            SlotId(slot),
            RoomId(rooms[r_idx].id.0.clone()),
        ));
    }

    let objective_value = -(course_on_day.values().map(|v| solution.value(*v)).sum::<f64>())
        + students
            .iter()
            .map(|s| solution.value(last[s]) - solution.value(first[s]))
            .sum::<f64>();

    Ok(SolveResult {
        assignments,
        status: SolveStatus::Optimal,
        objective_value,
    })
}

fn classify_solve_error(
    err: good_lp::ResolutionError,
    config: &ScheduleConfig,
) -> anyhow::Error {
    let message = format!("{err:?}").to_lowercase();
    if message.contains("infeasible") {
        SchedulerError::Infeasible.into()
    } else if message.contains("time") {
        SchedulerError::SolverTimeout {
            seconds: config.time_budget_seconds,
        }
        .into()
    } else {
        anyhow::anyhow!("solver failed to produce a solution: {err:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet as Bset;

    fn make_teacher(id: &str, courses: &[&str]) -> Teacher {
        Teacher {
            id: TeacherId(id.to_string()),
            owned_courses: courses.iter().map(|c| CourseId(c.to_string())).collect(),
            unavailable: Bset::new(),
        }
    }

    #[test]
    fn trivial_instance_is_solvable() {
        let section = Section::new(
            SectionId("math_S1".to_string()),
            CourseId("math".to_string()),
            TeacherId("t1".to_string()),
            vec![StudentId("s1".to_string())],
        );
        let rooms = vec![Room::new("r1", 30)];
        let teachers = vec![make_teacher("t1", &["math"])];
        let config = ScheduleConfig::default();

        let result = solve_schedule(&[section], &rooms, &teachers, &config).unwrap();
        assert_eq!(result.assignments.len(), 1);
        assert_ne!(result.assignments[0].slot.0, 13);
    }

    #[test]
    fn rejects_section_with_no_valid_slot_room_pair() {
        // Room too small for the roster, so no (slot, room) candidate exists.
        let section = Section::new(
            SectionId("math_S1".to_string()),
            CourseId("math".to_string()),
            TeacherId("t1".to_string()),
            vec![StudentId("s1".to_string()), StudentId("s2".to_string())],
        );
        let rooms = vec![Room::new("r1", 1)];
        let teachers = vec![make_teacher("t1", &["math"])];
        let config = ScheduleConfig::default();

        assert!(solve_schedule(&[section], &rooms, &teachers, &config).is_err());
    }
}
