use crate::server::{data::student::StudentRepository, model::student::StudentRecord};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod delete;

fn record(group_id: i32, level_id: i32, expert_id: i32, first_name: &str) -> StudentRecord {
    StudentRecord {
        group_id,
        first_name: first_name.to_string(),
        last_name: "Shevchenko".to_string(),
        english_level_id: level_id,
        expert_id,
        entry_score: None,
        incoming_test: None,
    }
}
