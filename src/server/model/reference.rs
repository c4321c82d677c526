//! Reference data attached to groups, students and events.

use crate::model::reference::{EnglishLevelDto, EventTypeDto, ExpertDto, StatusDto};

/// Status name marking a finished group.
pub const GRADUATED_STATUS: &str = "graduated";

/// Status assigned to new groups when none is requested.
pub const INITIAL_STATUS: &str = "forming";

/// Lifecycle status of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub id: i32,
    pub name: String,
}

impl Status {
    pub fn from_entity(entity: entity::status::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> StatusDto {
        StatusDto {
            id: self.id,
            name: self.name,
        }
    }

    /// Whether the group has graduated, compared case-insensitively.
    pub fn is_graduated(&self) -> bool {
        self.name.eq_ignore_ascii_case(GRADUATED_STATUS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnglishLevel {
    pub id: i32,
    pub name: String,
}

impl EnglishLevel {
    pub fn from_entity(entity: entity::english_level::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> EnglishLevelDto {
        EnglishLevelDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Expert who approves students' entry tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expert {
    pub id: i32,
    pub expert_name: String,
}

impl Expert {
    pub fn from_entity(entity: entity::expert::Model) -> Self {
        Self {
            id: entity.id,
            expert_name: entity.expert_name,
        }
    }

    pub fn into_dto(self) -> ExpertDto {
        ExpertDto {
            id: self.id,
            expert_name: self.expert_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventType {
    pub id: i32,
    pub name: String,
    /// Key dates are the schedule-significant events of a group.
    pub is_key_date: bool,
}

impl EventType {
    pub fn from_entity(entity: entity::event_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            is_key_date: entity.is_key_date,
        }
    }

    pub fn into_dto(self) -> EventTypeDto {
        EventTypeDto {
            id: self.id,
            name: self.name,
            is_key_date: self.is_key_date,
        }
    }
}
