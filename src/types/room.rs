use super::RoomId;
use serde::{Deserialize, Serialize};

/// A physical room with an integer seating capacity. Room-feature matching
/// beyond capacity is out of scope for this scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub capacity: u32,
}

impl Room {
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: RoomId(id.into()),
            capacity,
        }
    }

    /// Whether `count` students fit in this room.
    pub fn fits(&self, count: usize) -> bool {
        (count as u64) <= self.capacity as u64
    }
}
