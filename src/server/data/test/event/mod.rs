use crate::server::{data::event::EventRepository, model::event::EventsFilter};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};


fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}
