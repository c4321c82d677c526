use crate::server::{
    error::{
        auth::{AuthError, DenialReason},
        validation::ValidationError,
        AppError,
    },
    model::group::{CreateGroupParams, UpdateGroupParams},
    service::group::GroupService,
};
use test_utils::{builder::TestBuilder, factory};

mod add_group;
mod delete_group;
mod read;
mod update_group;

fn create_params(name: &str) -> CreateGroupParams {
    CreateGroupParams {
        name: name.to_string(),
        location_id: None,
        status_id: None,
        teacher_ids: vec![],
        start_date: None,
        finish_date: None,
    }
}

fn denied(result: &Result<impl std::fmt::Debug, AppError>, reason: DenialReason) -> bool {
    matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(r))) if *r == reason
    )
}
