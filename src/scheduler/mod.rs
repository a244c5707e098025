mod section_builder;
mod feasibility_guards;
mod model_builder;

pub use section_builder::*;
pub use feasibility_guards::*;
pub use model_builder::*;

use crate::error::Result;
use crate::types::{Schedule, ScheduleInput, SlotId, TOTAL_SLOTS};
use crate::validator::validate_schedule;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// Runs the full pipeline: `Loaded -> Sectioned -> GuardsPassed ->
/// ModelBuilt -> Solved -> Validated`. Each phase consumes the previous
/// phase's immutable output; any phase may fail the whole run with a typed
/// error and there are no retries.
pub fn generate_schedule(input: &ScheduleInput, quiet: bool) -> Result<Schedule> {
    let start_time = Instant::now();

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}% {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    };

    // Phase 1: Section Builder
    progress.set_message("Building sections...");
    progress.set_position(10);
    let sections = build_sections(
        &input.courses,
        &input.teachers,
        &input.students,
        input.config.max_section_size,
    )?;

    // Phase 2: Feasibility Guards. These run against the full fixed slot
    // grid, not the restriction-filtered subset — per SPEC_FULL.md, a
    // restricted slot shrinks what the solver can actually use but isn't
    // counted against the Guards' conservative arithmetic ceilings.
    progress.set_message("Checking feasibility...");
    progress.set_position(25);
    let all_slots: Vec<SlotId> = SlotId::all().collect();
    debug_assert!(all_slots.len() as u32 == TOTAL_SLOTS);
    check_feasibility(
        &sections,
        &input.rooms,
        &all_slots,
        input.config.max_sessions_per_day,
    )?;

    // Phase 3+4: Constraint Model Builder & Solver Driver
    progress.set_message("Building and solving the constraint model...");
    progress.set_position(40);
    let solve_result = solve_schedule(&sections, &input.rooms, &input.teachers, &input.config)?;

    // Phase 5: Clash Validator
    progress.set_message("Validating schedule...");
    progress.set_position(90);
    validate_schedule(&sections, &solve_result.assignments)?;

    progress.set_message("Complete!");
    progress.set_position(100);
    progress.finish_with_message("Schedule generated successfully");

    let elapsed = start_time.elapsed();
    let mut schedule = Schedule::new(sections, solve_result.assignments);
    schedule.metadata.objective_value = solve_result.objective_value;
    schedule.metadata.solve_time_ms = elapsed.as_millis() as u64;

    Ok(schedule)
}
