use crate::error::{Result, SchedulerError};
use crate::types::{
    Course, CourseId, Room, RoomId, ScheduleConfig, ScheduleInput, SlotId, Student, StudentId,
    Teacher, TeacherId,
};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// On-disk shape of `teachers.json`: a mapping from teacher name to the
/// courses it owns and the slot labels it is unavailable for.
#[derive(Debug, Deserialize)]
struct RawTeacher {
    courses: Vec<String>,
    #[serde(default)]
    unavailable: Vec<String>,
}

/// On-disk shape of one entry in `rooms.json`.
#[derive(Debug, Deserialize)]
struct RawRoom {
    name: String,
    capacity: u32,
}

/// Load the full dataset (five JSON files plus an optional TOML config)
/// from a directory.
pub fn load_input_from_dir(dir: &Path) -> Result<ScheduleInput> {
    let courses = load_courses(&dir.join("courses.json"))?;
    let teachers = load_teachers(&dir.join("teachers.json"))?;
    let rooms = load_rooms(&dir.join("rooms.json"))?;
    let students = load_students(&dir.join("students.json"))?;
    // time_slots.json's length is consumed only to sanity-check the fixed
    // grid size; its contents are otherwise unused.
    let _time_slot_count = load_time_slot_count(&dir.join("time_slots.json"))?;
    let config = load_config_or_default(&dir.join("config.toml"));

    Ok(ScheduleInput {
        courses,
        teachers,
        rooms,
        students,
        config,
    })
}

pub fn load_courses(path: &Path) -> Result<Vec<Course>> {
    let names: Vec<String> = load_json_file(path)?;
    Ok(names.into_iter().map(Course::new).collect())
}

pub fn load_teachers(path: &Path) -> Result<Vec<Teacher>> {
    // IndexMap preserves the file's key order rather than re-sorting it,
    // same as load_students below.
    let raw: IndexMap<String, RawTeacher> = load_json_file(path)?;
    raw.into_iter()
        .map(|(name, entry)| {
            let owned_courses: BTreeSet<CourseId> =
                entry.courses.into_iter().map(CourseId).collect();
            let unavailable: BTreeSet<SlotId> = entry
                .unavailable
                .iter()
                .map(|label| parse_slot_label(label))
                .collect::<Result<_>>()?;
            Ok(Teacher {
                id: TeacherId(name),
                owned_courses,
                unavailable,
            })
        })
        .collect()
}

pub fn load_rooms(path: &Path) -> Result<Vec<Room>> {
    let raw: Vec<RawRoom> = load_json_file(path)?;
    Ok(raw
        .into_iter()
        .map(|r| Room::new(r.name, r.capacity))
        .collect())
}

pub fn load_students(path: &Path) -> Result<Vec<Student>> {
    // Section building block-partitions each course's roster in "input
    // order", i.e. the order students appear in this file — an IndexMap
    // keeps that order instead of re-sorting by name.
    let raw: IndexMap<String, Vec<String>> = load_json_file(path)?;
    Ok(raw
        .into_iter()
        .map(|(name, courses)| Student {
            id: StudentId(name),
            enrolled_courses: courses.into_iter().map(CourseId).collect(),
        })
        .collect())
}

fn load_time_slot_count(path: &Path) -> Result<usize> {
    let slots: Vec<serde_json::Value> = load_json_file(path)?;
    Ok(slots.len())
}

/// Parse a slot label of the form `Slot<N>` into a [`SlotId`].
fn parse_slot_label(label: &str) -> Result<SlotId> {
    let digits = label.strip_prefix("Slot").ok_or_else(|| SchedulerError::InvalidSlotLabel {
        label: label.to_string(),
        reason: "expected a 'Slot' prefix".to_string(),
    })?;
    let n: u32 = digits.parse().map_err(|_| SchedulerError::InvalidSlotLabel {
        label: label.to_string(),
        reason: "expected an integer after 'Slot'".to_string(),
    })?;
    Ok(SlotId(n))
}

/// Load the policy config from an optional TOML file, or fall back to
/// defaults when the file is missing or fails to parse.
pub fn load_config_or_default(path: &Path) -> ScheduleConfig {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => ScheduleConfig::default(),
        }
    } else {
        ScheduleConfig::default()
    }
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| SchedulerError::FileRead {
        path: path_str.clone(),
        source: e,
    })?;

    serde_json::from_str(&content)
        .map_err(|e| {
            SchedulerError::JsonParse {
                file: path_str,
                message: e.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slot_label() {
        assert_eq!(parse_slot_label("Slot13").unwrap(), SlotId(13));
    }

    #[test]
    fn rejects_malformed_slot_label() {
        assert!(parse_slot_label("Period13").is_err());
        assert!(parse_slot_label("Slotxyz").is_err());
    }
}
