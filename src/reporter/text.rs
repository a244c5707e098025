use crate::types::Schedule;
use colored::Colorize;

/// Prints a short terminal summary after a successful run. Every section
/// is, by construction, assigned, so there is no fill-rate or unassigned
/// count to report.
pub fn print_summary(schedule: &Schedule) {
    println!();
    println!("{}", "✓ Schedule generated successfully".green().bold());
    println!();
    println!("  Sections:        {}", schedule.sections.len());
    println!("  Assignments:     {}", schedule.total_assignments());
    println!(
        "  Objective value: {:.1}",
        schedule.metadata.objective_value
    );
    println!("  Solve time:      {}ms", schedule.metadata.solve_time_ms);
    println!();
}
