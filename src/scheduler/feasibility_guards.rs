use crate::error::{Result, SchedulerError};
use crate::types::{Room, Section, SlotId, TeacherId};
use std::collections::HashMap;

/// Phase 2: cheap arithmetic checks that reject obviously infeasible inputs
/// before the (expensive) constraint model is built and solved. Both checks
/// are computed against the full fixed slot grid (`|slots|`), not the
/// restriction-filtered subset — globally restricted slots are a matter for
/// the solver, not these conservative guards.
pub fn check_feasibility(
    sections: &[Section],
    rooms: &[Room],
    all_slots: &[SlotId],
    max_sessions_per_day: u32,
) -> Result<()> {
    check_slot_budget(sections, rooms, all_slots)?;
    check_teacher_ceiling(sections, all_slots, max_sessions_per_day)?;
    Ok(())
}

fn check_slot_budget(sections: &[Section], rooms: &[Room], all_slots: &[SlotId]) -> Result<()> {
    let needed = sections.len() as u32;
    let available = (all_slots.len() as u32) * (rooms.len() as u32);
    if needed > available {
        return Err(SchedulerError::SlotBudgetExceeded {
            needed,
            available,
            shortage: needed - available,
        }
        .into());
    }
    Ok(())
}

/// Conservative per-teacher ceiling: a teacher cannot be assigned more
/// sections than the smaller of (all slots) and (5 days * the daily cap).
fn check_teacher_ceiling(
    sections: &[Section],
    all_slots: &[SlotId],
    max_sessions_per_day: u32,
) -> Result<()> {
    let mut counts: HashMap<&TeacherId, u32> = HashMap::new();
    for section in sections {
        *counts.entry(&section.teacher_id).or_insert(0) += 1;
    }

    let ceiling = all_slots.len() as u32;
    let day_ceiling = max_sessions_per_day * crate::types::DAYS_PER_WEEK;
    let ceiling = ceiling.min(day_ceiling);

    for (teacher_id, assigned) in counts {
        if assigned > ceiling {
            return Err(SchedulerError::TeacherOverloaded {
                teacher_id: teacher_id.0.clone(),
                assigned,
                ceiling,
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CourseId, SectionId, StudentId, TeacherId};

    fn section(id: &str, teacher: &str) -> Section {
        Section::new(
            SectionId(id.to_string()),
            CourseId("c".to_string()),
            TeacherId(teacher.to_string()),
            vec![StudentId("s1".to_string())],
        )
    }

    #[test]
    fn rejects_slot_shortage() {
        let sections: Vec<Section> = (0..30).map(|i| section(&format!("c_S{i}"), "t1")).collect();
        let rooms = vec![Room::new("r1", 30), Room::new("r2", 30)];
        let slots: Vec<SlotId> = (1..=5).map(SlotId).collect();

        let err = check_feasibility(&sections, &rooms, &slots, 5).unwrap_err();
        assert!(err.to_string().contains("shortage"));
    }

    #[test]
    fn rejects_teacher_overload() {
        let sections: Vec<Section> = (0..26).map(|i| section(&format!("c_S{i}"), "t1")).collect();
        let rooms = vec![Room::new("r1", 30)];
        let slots: Vec<SlotId> = (1..=25).map(SlotId).collect();

        let err = check_feasibility(&sections, &rooms, &slots, 5).unwrap_err();
        assert!(err.to_string().contains("t1"));
    }

    #[test]
    fn accepts_comfortable_input() {
        let sections: Vec<Section> = (0..3).map(|i| section(&format!("c_S{i}"), "t1")).collect();
        let rooms = vec![Room::new("r1", 30)];
        let slots: Vec<SlotId> = (1..=25).map(SlotId).collect();

        assert!(check_feasibility(&sections, &rooms, &slots, 5).is_ok());
    }
}
