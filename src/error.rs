use thiserror::Error;

/// Domain-specific errors for the scheduler.
#[derive(Error, Debug)]
pub enum SchedulerError {
    // Input/parse errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in '{file}': {message}")]
    JsonParse { file: String, message: String },

    #[error("Failed to parse TOML in '{file}': {message}")]
    TomlParse { file: String, message: String },

    // InvalidInput: raised by ingestion validation and the section builder
    #[error("Course '{course_id}' has no owning teacher")]
    NoOwningTeacher { course_id: String },

    #[error("Course '{course_id}' is owned by more than one teacher: '{first}' and '{second}'")]
    MultipleOwners {
        course_id: String,
        first: String,
        second: String,
    },

    #[error("Student '{student_id}' references unknown course '{course_id}'")]
    UnknownCourse {
        student_id: String,
        course_id: String,
    },

    #[error("Duplicate {id_type} id: '{id}'")]
    DuplicateId { id_type: String, id: String },

    #[error("Invalid slot label '{label}': {reason}")]
    InvalidSlotLabel { label: String, reason: String },

    // Infeasible: raised by the feasibility guards and the solver
    #[error(
        "Not enough (slot, room) capacity: {needed} sections required, \
         only {available} (slot, room) pairs exist (shortage of {shortage})"
    )]
    SlotBudgetExceeded {
        needed: u32,
        available: u32,
        shortage: u32,
    },

    #[error(
        "Teacher '{teacher_id}' is assigned {assigned} sections, exceeding the \
         conservative ceiling of {ceiling}"
    )]
    TeacherOverloaded {
        teacher_id: String,
        assigned: u32,
        ceiling: u32,
    },

    #[error("No feasible schedule exists for this input")]
    Infeasible,

    // SolverTimeout
    #[error("Solver exceeded its {seconds}s time budget without concluding")]
    SolverTimeout { seconds: u32 },

    // SolverBug: raised by the clash validator
    #[error("Solver produced an assignment that violates a hard invariant: {0}")]
    SolverBug(String),
}

/// Use `anyhow::Result` at application boundaries, per the reference
/// scheduler's error-handling convention.
pub type Result<T> = anyhow::Result<T>;
