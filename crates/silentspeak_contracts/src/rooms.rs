#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::common::validate_text;
use crate::{ContractViolation, Validate};

/// A scheduled support room as listed under its date group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSlot {
    pub id: String,
    pub name: String,
    pub time: String,
    pub focus: String,
    pub availability: String,
}

impl Validate for RoomSlot {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_text("room_slot.id", &self.id, 64)?;
        validate_text("room_slot.name", &self.name, 128)?;
        validate_text("room_slot.time", &self.time, 64)?;
        validate_text("room_slot.focus", &self.focus, 256)?;
        validate_text("room_slot.availability", &self.availability, 128)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomGroup {
    pub label: String,
    pub rooms: Vec<RoomSlot>,
}

impl RoomGroup {
    /// Rooms with the group label attached, as shown when joining.
    pub fn labelled_rooms(&self) -> Vec<Room> {
        self.rooms
            .iter()
            .map(|slot| Room {
                slot: slot.clone(),
                date_label: self.label.clone(),
            })
            .collect()
    }
}

impl Validate for RoomGroup {
    fn validate(&self) -> Result<(), ContractViolation> {
        validate_text("room_group.label", &self.label, 64)?;
        if self.rooms.is_empty() {
            return Err(ContractViolation::InvalidValue {
                field: "room_group.rooms",
                reason: "must contain at least one room",
            });
        }
        for room in &self.rooms {
            room.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub slot: RoomSlot,
    pub date_label: String,
}

impl Room {
    pub fn name(&self) -> &str {
        &self.slot.name
    }
}
