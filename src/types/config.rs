use super::SlotId;
use serde::{Deserialize, Serialize};

/// Tunable policy knobs for the scheduler, loadable from an optional
/// `config.toml` with hard-coded defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Maximum students per section; courses with larger enrolment are
    /// split into multiple sections.
    #[serde(default = "default_max_section_size")]
    pub max_section_size: u32,
    /// Maximum sections a teacher may hold on a single day.
    #[serde(default = "default_max_sessions_per_day")]
    pub max_sessions_per_day: u32,
    /// Wall-clock budget, in seconds, given to the MIP solver.
    #[serde(default = "default_time_budget_seconds")]
    pub time_budget_seconds: u32,
    /// Slots that may never be used for any section, regardless of teacher
    /// availability.
    #[serde(default = "default_restricted_slots")]
    pub restricted_slots: Vec<SlotId>,
}

fn default_max_section_size() -> u32 {
    30
}

fn default_max_sessions_per_day() -> u32 {
    5
}

fn default_time_budget_seconds() -> u32 {
    300
}

fn default_restricted_slots() -> Vec<SlotId> {
    // day index 2 (Tuesday), intra-day index 2 -> slot 13.
    vec![SlotId::from_day_intra(2, 2)]
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            max_section_size: default_max_section_size(),
            max_sessions_per_day: default_max_sessions_per_day(),
            time_budget_seconds: default_time_budget_seconds(),
            restricted_slots: default_restricted_slots(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_policy() {
        let config = ScheduleConfig::default();
        assert_eq!(config.max_section_size, 30);
        assert_eq!(config.max_sessions_per_day, 5);
        assert_eq!(config.time_budget_seconds, 300);
        assert_eq!(config.restricted_slots, vec![SlotId(13)]);
    }
}
