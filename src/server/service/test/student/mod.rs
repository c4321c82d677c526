use crate::server::{
    error::{
        auth::{AuthError, DenialReason},
        validation::{StudentField, ValidationError},
        AppError,
    },
    model::student::{StudentForm, StudentParams},
    service::student::{StudentService, NEW_STUDENT_ID},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod add_students;
mod update_students;

fn params(first_name: &str, level_id: i32, expert_id: i32) -> StudentParams {
    StudentParams {
        first_name: Some(first_name.to_string()),
        last_name: Some("Kovalenko".to_string()),
        english_level_id: Some(level_id),
        expert_id: Some(expert_id),
        ..Default::default()
    }
}
