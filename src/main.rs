use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use class_timetable_solver::error::SchedulerError;
use class_timetable_solver::parser::{load_input_from_dir, validate_input};
use class_timetable_solver::reporter::{print_summary, read_master_timetable, write_master_timetable};
use class_timetable_solver::scheduler::{build_sections, generate_schedule};
use class_timetable_solver::validator::validate_full;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "class-timetable-solver")]
#[command(about = "Constraint-based weekly class timetable solver")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a dataset, solve the timetable, and write Master_Timetable.csv.
    Schedule {
        /// Directory containing courses.json, teachers.json, rooms.json,
        /// students.json, time_slots.json and an optional config.toml.
        #[arg(short, long)]
        data: PathBuf,

        /// Directory the CSV report is written to. Falls back to the
        /// CSV_DIRECTORY_PATH environment variable, then "./output".
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress progress output.
        #[arg(short, long)]
        quiet: bool,
    },

    /// Re-check a previously written Master_Timetable.csv against its
    /// input dataset, without re-running the solver.
    Validate {
        /// Directory containing the original input dataset.
        #[arg(short, long)]
        data: PathBuf,

        /// Path to the Master_Timetable.csv to check.
        #[arg(short, long)]
        schedule: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Schedule {
            data,
            output,
            quiet,
        } => run_schedule(&data, output, quiet),
        Commands::Validate { data, schedule } => run_validate(&data, &schedule),
    }
}

fn run_schedule(data: &PathBuf, output: Option<PathBuf>, quiet: bool) -> Result<()> {
    let output_dir = output.unwrap_or_else(resolve_output_dir);

    let input = load_input_from_dir(data).context("Failed to load input data")?;
    validate_input(&input).context("Dataset failed structural validation")?;

    if !quiet {
        println!(
            "Loaded {} courses, {} teachers, {} rooms, {} students",
            input.courses.len(),
            input.teachers.len(),
            input.rooms.len(),
            input.students.len()
        );
    }

    let schedule = generate_schedule(&input, quiet)?;

    write_master_timetable(&schedule, &input, &output_dir)
        .context("Failed to write Master_Timetable.csv")?;

    if quiet {
        println!(
            "{}",
            serde_json::json!({
                "sections": schedule.sections.len(),
                "assignments": schedule.total_assignments(),
                "objective_value": schedule.metadata.objective_value,
                "solve_time_ms": schedule.metadata.solve_time_ms,
            })
        );
    } else {
        print_summary(&schedule);
        println!(
            "Report written to: {}",
            output_dir
                .join("Master_Timetable.csv")
                .display()
                .to_string()
                .green()
        );
    }

    Ok(())
}

/// `CSV_DIRECTORY_PATH` from the process environment, falling back to
/// `./output`.
fn resolve_output_dir() -> PathBuf {
    std::env::var("CSV_DIRECTORY_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./output"))
}

fn run_validate(data: &PathBuf, schedule_path: &PathBuf) -> Result<()> {
    let input = load_input_from_dir(data).context("Failed to load input data")?;
    let sections = build_sections(
        &input.courses,
        &input.teachers,
        &input.students,
        input.config.max_section_size,
    )
    .context("Failed to rebuild sections from input")?;

    let assignments = read_master_timetable(schedule_path)
        .with_context(|| format!("Failed to read {}", schedule_path.display()))?;

    let violations = validate_full(
        &sections,
        &assignments,
        &input.rooms,
        &input.teachers,
        &input.config,
    );

    if violations.is_empty() {
        println!("{}", "\u{2713} Schedule is valid".green().bold());
    } else {
        println!("{}", "\u{2717} Schedule has violations".red().bold());
        for v in &violations {
            println!("  - {}: {}", v.invariant.red(), v.message);
        }
        return Err(SchedulerError::SolverBug(format!(
            "{} invariant violation(s) found",
            violations.len()
        ))
        .into());
    }

    Ok(())
}
