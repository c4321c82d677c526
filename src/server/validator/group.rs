//! Group lifecycle validation.
//!
//! `GroupValidator` holds the rules deciding whether a user may create, edit or delete
//! a group and whether a group name is available. The permission checks are pure
//! functions over already loaded domain models so they can be evaluated against both
//! the persisted group and a relocated copy of it.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        group::GroupRepository, location::LocationRepository, reference::StatusRepository,
        user::UserRepository,
    },
    error::{
        auth::{AuthError, DenialReason},
        validation::ValidationError,
        AppError,
    },
    model::{
        group::{Group, GroupPatch, Teacher, UpdateGroupParams},
        reference::Status,
        user::{Role, User},
    },
    validator::is_at_location,
};

pub struct GroupValidator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupValidator<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the persisted group and merges the partial update onto it.
    ///
    /// Every referenced ID in the update is resolved first; fields missing from the
    /// update keep their persisted values.
    ///
    /// # Arguments
    /// - `id` - ID of the group being updated
    /// - `params` - Partial update received from the client
    ///
    /// # Returns
    /// - `Ok(Group)` - The group as it would look after the update
    /// - `Err(AppError::NotFound)` - The group or a referenced location, status or user
    ///   does not exist
    /// - `Err(AppError::ValidationErr(NotATeacher))` - A listed teacher lacks the teacher role
    pub async fn fields_check(&self, id: i32, params: UpdateGroupParams) -> Result<Group, AppError> {
        let persisted = GroupRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", id)))?;

        self.merge_update(&persisted, params).await
    }

    /// Resolves the update's referenced IDs and merges it onto an already loaded group.
    ///
    /// # Returns
    /// - `Ok(Group)` - The group as it would look after the update
    /// - `Err(AppError::NotFound)` - A referenced location, status or user does not exist
    /// - `Err(AppError::ValidationErr(NotATeacher))` - A listed teacher lacks the teacher role
    pub async fn merge_update(
        &self,
        persisted: &Group,
        params: UpdateGroupParams,
    ) -> Result<Group, AppError> {
        let location = match params.location_id {
            Some(location_id) => Some(
                LocationRepository::new(self.db)
                    .find_by_id(location_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Location {} not found", location_id))
                    })?,
            ),
            None => None,
        };

        let status = match params.status_id {
            Some(status_id) => Some(
                StatusRepository::new(self.db)
                    .find_by_id(status_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Status {} not found", status_id)))?,
            ),
            None => None,
        };

        let teachers = match params.teacher_ids {
            Some(teacher_ids) => Some(self.resolve_teachers(&teacher_ids).await?),
            None => None,
        };

        let patch = GroupPatch {
            name: params.name,
            location,
            status,
            teachers,
            start_date: params.start_date,
            finish_date: params.finish_date,
        };

        Ok(patch.merge_onto(persisted))
    }

    /// Resolves user IDs into the teachers of a group.
    ///
    /// Duplicate IDs are collapsed.
    ///
    /// # Returns
    /// - `Ok(Vec<Teacher>)` - Teachers ordered by user ID
    /// - `Err(AppError::NotFound)` - An ID matches no user
    /// - `Err(AppError::ValidationErr(NotATeacher))` - A user lacks the teacher role
    pub async fn resolve_teachers(&self, teacher_ids: &[i32]) -> Result<Vec<Teacher>, AppError> {
        let mut ids = teacher_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let users = UserRepository::new(self.db).get_by_ids(&ids).await?;

        if let Some(missing) = ids.iter().find(|id| !users.iter().any(|u| u.id == **id)) {
            return Err(AppError::NotFound(format!("User {} not found", missing)));
        }

        users
            .into_iter()
            .map(|user| match user.role {
                Role::Teacher => Ok(Teacher {
                    id: user.id,
                    username: user.username,
                }),
                Role::Coordinator | Role::Admin => {
                    Err(AppError::from(ValidationError::NotATeacher(user.id)))
                }
            })
            .collect()
    }

    /// Whether no group uses exactly this name.
    pub async fn is_valid(&self, name: &str) -> Result<bool, DbErr> {
        Ok(GroupRepository::new(self.db)
            .find_id_by_name(name)
            .await?
            .is_none())
    }

    /// Whether the group with `id` may carry `name`: the name is free or already its own.
    pub async fn is_valid_group_name(&self, id: i32, name: &str) -> Result<bool, DbErr> {
        let owner = GroupRepository::new(self.db).find_id_by_name(name).await?;

        Ok(owner.is_none_or(|owner_id| owner_id == id))
    }

    /// Coordinators may only manipulate groups of their own location; other roles pass.
    pub fn check_coordinator_location_to_manipulate_group(
        user: &User,
        group: &Group,
    ) -> Result<(), AuthError> {
        match user.role {
            Role::Coordinator if !is_at_location(user, &group.location) => Err(
                AuthError::AccessDenied(DenialReason::CoordinatorManipulateGroup),
            ),
            Role::Teacher | Role::Coordinator | Role::Admin => Ok(()),
        }
    }

    /// Decides whether the user may edit the group.
    ///
    /// - Teachers must be assigned to the group, work at its location and the group's
    ///   current status must not be graduated
    /// - Coordinators must work at the group's location
    /// - Admins may edit any group
    ///
    /// # Arguments
    /// - `user` - The acting user
    /// - `group` - The group whose teachers and location are checked
    /// - `current_status` - The group's persisted status
    pub fn check_group_edit_permissions(
        user: &User,
        group: &Group,
        current_status: &Status,
    ) -> Result<(), AuthError> {
        let denied = |reason| Err(AuthError::AccessDenied(reason));

        match user.role {
            Role::Teacher => {
                let assigned = group.has_teacher(user.id);
                let same_location = is_at_location(user, &group.location);

                if assigned && !same_location {
                    denied(DenialReason::TeacherEditAlienLocation)
                } else if !assigned {
                    denied(DenialReason::TeacherEditNotAssigned)
                } else if current_status.is_graduated() {
                    denied(DenialReason::TeacherEditGroupGraduated)
                } else {
                    Ok(())
                }
            }
            Role::Coordinator if !is_at_location(user, &group.location) => {
                denied(DenialReason::CoordinatorEditAlienLocation)
            }
            Role::Coordinator | Role::Admin => Ok(()),
        }
    }
}
