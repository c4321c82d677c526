use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::reference::EventTypeDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDto {
    pub id: i32,
    pub group_id: i32,
    pub event_type: EventTypeDto,
    #[serde(with = "crate::model::date::date_time")]
    pub date_time: NaiveDateTime,
}

/// Query parameters selecting an inclusive time range.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRangeDto {
    #[serde(with = "crate::model::date::date_time")]
    pub start: NaiveDateTime,
    #[serde(with = "crate::model::date::date_time")]
    pub finish: NaiveDateTime,
}

/// Body of `POST /events/filter`.
///
/// Without a range only key dates can be requested; with a range all events inside
/// it are returned unless `key_dates_only` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsFilterDto {
    pub groups: Vec<i32>,
    #[serde(default)]
    pub range: Option<EventRangeDto>,
    #[serde(default)]
    pub key_dates_only: bool,
}
