use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{
        auth::{AuthError, DenialReason},
        AppError,
    },
    model::{
        group::Group,
        user::{Role, User},
    },
    validator::is_at_location,
};

/// Authorization rules for adding and updating students.
pub struct StudentValidator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentValidator<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Coordinators may only manage students of groups at their own location.
    ///
    /// # Arguments
    /// - `group` - The group the student belongs or is moved to
    /// - `username` - Username of the acting user
    ///
    /// # Returns
    /// - `Ok(())` - The user may manage students of the group
    /// - `Err(AppError::NotFound)` - No user with that username
    /// - `Err(AppError::AuthErr(AccessDenied))` - Coordinator of another location
    pub async fn check_coordinator_location_to_manipulate_student(
        &self,
        group: &Group,
        username: &str,
    ) -> Result<(), AppError> {
        let user = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))?;

        Ok(Self::check_coordinator_location_for(&user, group)?)
    }

    /// Same rule as [`Self::check_coordinator_location_to_manipulate_student`] for an
    /// already resolved user.
    pub fn check_coordinator_location_for(user: &User, group: &Group) -> Result<(), AuthError> {
        match user.role {
            Role::Coordinator if !is_at_location(user, &group.location) => Err(
                AuthError::AccessDenied(DenialReason::CoordinatorManipulateStudent),
            ),
            Role::Teacher | Role::Coordinator | Role::Admin => Ok(()),
        }
    }
}
