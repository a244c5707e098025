//! Constraint-based weekly class timetable solver.
//!
//! Given a course catalogue, a teacher roster (each owning a subset of
//! courses and carrying forbidden time slots), a room inventory, a fixed
//! 5-day x 5-slot weekly grid, and student enrolments, this crate produces
//! a conflict-free assignment of every course section to a (slot, room)
//! pair. The pipeline is a linear pass-through of immutable phases:
//!
//! 1. **Section Builder**: deterministically explode enrolments into
//!    bounded-size sections.
//! 2. **Feasibility Guards**: cheap arithmetic rejects before the solver.
//! 3. **Constraint Model Builder / Solver Driver**: build and solve the
//!    assignment-cube MIP model.
//! 4. **Clash Validator**: independently re-check every hard invariant.
//!
//! # Example
//!
//! ```no_run
//! use class_timetable_solver::parser::load_input_from_dir;
//! use class_timetable_solver::scheduler::generate_schedule;
//! use std::path::Path;
//!
//! let input = load_input_from_dir(Path::new("./data/demo")).unwrap();
//! let schedule = generate_schedule(&input, false).unwrap();
//! println!("assignments: {}", schedule.total_assignments());
//! ```

pub mod error;
pub mod parser;
pub mod reporter;
pub mod scheduler;
pub mod types;
pub mod validator;

pub use error::{Result, SchedulerError};
