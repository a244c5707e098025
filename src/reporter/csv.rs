use crate::error::{Result, SchedulerError};
use crate::types::{Assignment, CourseId, RoomId, Schedule, ScheduleInput, SectionId, SlotId, TeacherId};
use std::collections::HashMap;
use std::path::Path;

/// Writes the one CSV report this system produces, `Master_Timetable.csv`,
/// with header `Section,Course,Teacher,Students,Day,Time,Room` and one row
/// per section. Student lists are comma-joined inside a single CSV field;
/// the `csv` crate's quoting takes care of escaping that for us.
pub fn write_master_timetable(
    schedule: &Schedule,
    input: &ScheduleInput,
    output_dir: &Path,
) -> Result<()> {
    std::fs::create_dir_all(output_dir).map_err(|e| SchedulerError::FileRead {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let path = output_dir.join("Master_Timetable.csv");
    let mut writer = ::csv::Writer::from_path(&path).map_err(|e| {
        SchedulerError::FileRead {
            path: path.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, e.to_string()),
        }
    })?;

    writer
        .write_record(["Section", "Course", "Teacher", "Students", "Day", "Time", "Room"])
        .map_err(csv_err)?;

    let course_names: HashMap<&CourseId, &str> =
        input.courses.iter().map(|c| (&c.id, c.id.0.as_str())).collect();
    let teacher_names: HashMap<&TeacherId, &str> =
        input.teachers.iter().map(|t| (&t.id, t.id.0.as_str())).collect();

    for section in &schedule.sections {
        let assignment = schedule.assignment_for(&section.id).ok_or_else(|| {
            SchedulerError::SolverBug(format!(
                "section '{}' has no assignment to report",
                section.id
            ))
        })?;
        let (day, time) = assignment.slot.decode();
        let course_name = course_names.get(&section.course_id).copied().unwrap_or("");
        let teacher_name = teacher_names.get(&section.teacher_id).copied().unwrap_or("");
        let students = section
            .students
            .iter()
            .map(|s| s.0.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        writer
            .write_record([
                section.id.0.as_str(),
                course_name,
                teacher_name,
                students.as_str(),
                day,
                time,
                assignment.room_id.0.as_str(),
            ])
            .map_err(csv_err)?;
    }

    writer.flush().map_err(|e| SchedulerError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

fn csv_err(e: ::csv::Error) -> anyhow::Error {
    anyhow::anyhow!("failed writing Master_Timetable.csv: {e}")
}

/// Reads a previously written `Master_Timetable.csv` back into
/// `(section_id, slot, room_id)` assignments, by inverting the `Day`/`Time`
/// columns through [`SlotId::from_day_and_time`]. Used by the standalone
/// `validate` CLI subcommand to re-check a report against its input
/// dataset without re-running the solver.
pub fn read_master_timetable(path: &Path) -> Result<Vec<Assignment>> {
    let mut reader = ::csv::Reader::from_path(path).map_err(|e| {
        SchedulerError::FileRead {
            path: path.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, e.to_string()),
        }
    })?;

    let mut assignments = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let section_id = record.get(0).unwrap_or("").to_string();
        let day = record.get(4).unwrap_or("");
        let time = record.get(5).unwrap_or("");
        let room = record.get(6).unwrap_or("").to_string();

        let slot = SlotId::from_day_and_time(day, time).ok_or_else(|| {
            anyhow::anyhow!("unrecognized day/time pair '{day}'/'{time}' in report row for '{section_id}'")
        })?;

        assignments.push(Assignment::new(SectionId(section_id), slot, RoomId(room)));
    }

    Ok(assignments)
}
