mod hard_constraints;

pub use hard_constraints::*;

use crate::error::{Result, SchedulerError};
use crate::types::{Assignment, Room, ScheduleConfig, Section, Teacher};

/// The Clash Validator: an independent, post-solve re-check of every hard
/// invariant (P1-P7). Its only job is to catch a mismatch between what the
/// constraint model encoded and what the solver actually returned — a
/// violation here means the model under-constrained the problem, not that
/// the input was bad.
pub fn validate_schedule(sections: &[Section], assignments: &[Assignment]) -> Result<()> {
    // Capacity/availability/restricted-slot/daily-cap checks need the
    // original rooms/teachers/config; callers that only have sections and
    // assignments (e.g. the orchestrator) pass those in via `validate_full`.
    let violations = check_teacher_conflicts(sections, assignments)
        .into_iter()
        .chain(check_student_conflicts(sections, assignments))
        .chain(check_room_conflicts(sections, assignments))
        .collect::<Vec<_>>();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(SchedulerError::SolverBug(
            violations
                .into_iter()
                .map(|v| format!("[{}] {}", v.invariant, v.message))
                .collect::<Vec<_>>()
                .join("; "),
        )
        .into())
    }
}

/// The full seven-invariant validation pass, used by the `validate` CLI
/// subcommand against an already-written schedule plus its original input.
pub fn validate_full(
    sections: &[Section],
    assignments: &[Assignment],
    rooms: &[Room],
    teachers: &[Teacher],
    config: &ScheduleConfig,
) -> Vec<Violation> {
    check_teacher_conflicts(sections, assignments)
        .into_iter()
        .chain(check_student_conflicts(sections, assignments))
        .chain(check_room_conflicts(sections, assignments))
        .chain(check_capacity_violations(sections, assignments, rooms))
        .chain(check_teacher_availability(sections, assignments, teachers))
        .chain(check_restricted_slots(sections, assignments, config))
        .chain(check_daily_cap(sections, assignments, config))
        .collect()
}
