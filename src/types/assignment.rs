use super::{RoomId, SectionId, SlotId};
use serde::{Deserialize, Serialize};

/// The solver's output for a single section: the (slot, room) pair it was
/// placed into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub section_id: SectionId,
    pub slot: SlotId,
    pub room_id: RoomId,
}

impl Assignment {
    pub fn new(section_id: SectionId, slot: SlotId, room_id: RoomId) -> Self {
        Self {
            section_id,
            slot,
            room_id,
        }
    }
}
