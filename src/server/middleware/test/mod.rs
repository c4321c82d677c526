use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
    model::user::Role,
    validator::{ALL_ROLES, GROUP_REMOVERS},
};
use test_utils::{builder::TestBuilder, factory};
