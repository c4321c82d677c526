//! Authorization and business-rule validation.
//!
//! Services call into this layer before touching the repositories:
//!
//! - [`require_role`] gates every service operation on the acting user's role
//! - [`group::GroupValidator`] resolves partial group updates and decides who may
//!   create, edit and delete groups
//! - [`student::StudentValidator`] decides who may add or update students
//!
//! Every denial is reported as `AuthError::AccessDenied` carrying a `DenialReason`.

pub mod group;
pub mod student;

use crate::server::{
    error::auth::{AuthError, DenialReason},
    model::{
        location::Location,
        user::{Role, User},
    },
};

/// Roles allowed to read groups, students and events.
pub const ALL_ROLES: &[Role] = &[Role::Teacher, Role::Coordinator, Role::Admin];

/// Roles allowed to delete groups.
pub const GROUP_REMOVERS: &[Role] = &[Role::Coordinator, Role::Admin];

/// Roles allowed to list their own assigned groups.
pub const TEACHERS_ONLY: &[Role] = &[Role::Teacher];

/// Fails unless the user's role is one of `allowed`.
pub fn require_role(user: &User, allowed: &[Role]) -> Result<(), AuthError> {
    if allowed.contains(&user.role) {
        return Ok(());
    }

    tracing::debug!(
        "User {} with role {} denied, allowed roles: {:?}",
        user.id,
        user.role.as_str(),
        allowed
    );

    Err(AuthError::AccessDenied(DenialReason::RoleNotAllowed))
}

/// Whether the user works at the given location. Users without a location never do.
pub(crate) fn is_at_location(user: &User, location: &Location) -> bool {
    user.location.as_ref() == Some(location)
}
