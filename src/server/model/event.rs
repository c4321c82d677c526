use chrono::NaiveDateTime;

use crate::{
    model::event::{EventDto, EventsFilterDto},
    server::model::reference::EventType,
};

/// Dated occurrence tied to a group.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub group_id: i32,
    pub event_type: EventType,
    pub date_time: NaiveDateTime,
}

impl Event {
    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            group_id: self.group_id,
            event_type: self.event_type.into_dto(),
            date_time: self.date_time,
        }
    }
}

/// Criteria for querying events of one or more groups.
#[derive(Debug, Clone, PartialEq)]
pub struct EventsFilter {
    pub group_ids: Vec<i32>,
    /// Inclusive `(start, finish)` bounds on the event timestamp.
    pub range: Option<(NaiveDateTime, NaiveDateTime)>,
    /// Restricts the result to events whose type is a key date.
    pub key_dates_only: bool,
}

impl EventsFilter {
    pub fn from_dto(dto: EventsFilterDto) -> Self {
        Self {
            group_ids: dto.groups,
            range: dto.range.map(|range| (range.start, range.finish)),
            key_dates_only: dto.key_dates_only,
        }
    }
}
