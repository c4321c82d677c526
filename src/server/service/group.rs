//! Group management.
//!
//! `GroupService` implements the group lifecycle: listing and filtering groups,
//! creation with location and status defaults, partial updates gated by
//! `GroupValidator`, and deletion of groups without students.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{group::GroupRepository, location::LocationRepository, reference::StatusRepository},
    error::{
        auth::{AuthError, DenialReason},
        validation::ValidationError,
        AppError,
    },
    model::{
        group::{CreateGroupParams, Group, GroupRecord, GroupsFilter, UpdateGroupParams},
        reference::INITIAL_STATUS,
        user::{Role, User},
    },
    service::find_actor,
    validator::{group::GroupValidator, require_role, ALL_ROLES, GROUP_REMOVERS},
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all groups ordered by ID.
    pub async fn get_all_groups(&self, user: &User) -> Result<Vec<Group>, AppError> {
        require_role(user, ALL_ROLES)?;

        Ok(GroupRepository::new(self.db).get_all().await?)
    }

    /// Gets a single group.
    ///
    /// # Returns
    /// - `Ok(Group)` - The group with its relations
    /// - `Err(AppError::NotFound)` - No group with that ID
    pub async fn get_group_by_id(&self, user: &User, id: i32) -> Result<Group, AppError> {
        require_role(user, ALL_ROLES)?;

        GroupRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", id)))
    }

    pub async fn get_groups_by_location_ids(
        &self,
        user: &User,
        location_ids: &[i32],
    ) -> Result<Vec<Group>, AppError> {
        require_role(user, ALL_ROLES)?;

        Ok(GroupRepository::new(self.db)
            .get_by_location_ids(location_ids)
            .await?)
    }

    pub async fn get_groups_by_filter(
        &self,
        user: &User,
        filter: &GroupsFilter,
    ) -> Result<Vec<Group>, AppError> {
        require_role(user, ALL_ROLES)?;

        Ok(GroupRepository::new(self.db).get_by_filter(filter).await?)
    }

    /// Gets the groups at the user's own location; empty when the user has none.
    pub async fn get_groups_from_user_location(&self, user: &User) -> Result<Vec<Group>, AppError> {
        require_role(user, ALL_ROLES)?;

        let Some(location_id) = user.location_id() else {
            return Ok(Vec::new());
        };

        Ok(GroupRepository::new(self.db)
            .get_by_location_ids(&[location_id])
            .await?)
    }

    /// Creates a new group.
    ///
    /// Teachers and coordinators may only create groups at their own location, which is
    /// also the default when no location is given. A creating teacher is always assigned
    /// to the new group. Without a status the group starts as "forming".
    ///
    /// # Arguments
    /// - `params` - Group name, optional location and status, teachers and dates
    /// - `username` - Username of the acting user
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group
    /// - `Err(AppError::ValidationErr(DuplicateGroupName))` - The name is taken
    /// - `Err(AppError::AuthErr(AccessDenied))` - Role or location not allowed
    /// - `Err(AppError::NotFound)` - A referenced location, status or user does not exist
    pub async fn add_group(
        &self,
        params: CreateGroupParams,
        username: &str,
    ) -> Result<Group, AppError> {
        let actor = find_actor(self.db, username).await?;
        require_role(&actor, ALL_ROLES)?;

        let validator = GroupValidator::new(self.db);

        let location_id = match actor.role {
            Role::Teacher | Role::Coordinator => {
                let own_location_id = actor.location_id().ok_or(AuthError::AccessDenied(
                    DenialReason::CreateGroupAlienLocation,
                ))?;
                let location_id = params.location_id.unwrap_or(own_location_id);

                if location_id != own_location_id {
                    return Err(
                        AuthError::AccessDenied(DenialReason::CreateGroupAlienLocation).into(),
                    );
                }

                location_id
            }
            Role::Admin => params
                .location_id
                .or(actor.location_id())
                .ok_or_else(|| AppError::BadRequest("Group location is required".to_string()))?,
        };

        if !validator.is_valid(&params.name).await? {
            return Err(ValidationError::DuplicateGroupName(params.name).into());
        }

        let location = LocationRepository::new(self.db)
            .find_by_id(location_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Location {} not found", location_id)))?;

        let status_repo = StatusRepository::new(self.db);
        let status = match params.status_id {
            Some(status_id) => status_repo
                .find_by_id(status_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Status {} not found", status_id)))?,
            None => status_repo
                .find_by_name(INITIAL_STATUS)
                .await?
                .ok_or(ValidationError::MissingGroupStatus)?,
        };

        let mut teacher_ids = params.teacher_ids;
        if actor.role == Role::Teacher {
            teacher_ids.push(actor.id);
        }
        let teachers = validator.resolve_teachers(&teacher_ids).await?;

        let record = GroupRecord {
            name: params.name,
            location_id: location.id,
            status_id: status.id,
            teacher_ids: teachers.iter().map(|teacher| teacher.id).collect(),
            start_date: params.start_date,
            finish_date: params.finish_date,
        };
        let name = record.name.clone();

        let group = GroupRepository::new(self.db)
            .create(record)
            .await
            .map_err(|err| duplicate_name_or(err, &name))?;

        tracing::info!(
            "User {} created group {} '{}' at {}",
            actor.username,
            group.id,
            group.name,
            group.location.name
        );

        Ok(group)
    }

    /// Applies a partial update to a group.
    ///
    /// Edit permissions are checked against the persisted group and its persisted
    /// status. When the update moves the group, the check is repeated as if the
    /// persisted group were already at the new location, so a group cannot be moved
    /// into a location the user may not edit.
    ///
    /// # Arguments
    /// - `id` - ID of the group to update
    /// - `params` - Fields to change; missing fields keep their values
    /// - `username` - Username of the acting user
    ///
    /// # Returns
    /// - `Ok(Group)` - The updated group
    /// - `Err(AppError::NotFound)` - Group or a referenced entity does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - The user may not edit the group
    /// - `Err(AppError::ValidationErr(DuplicateGroupName))` - Another group has the name
    pub async fn update_group(
        &self,
        id: i32,
        params: UpdateGroupParams,
        username: &str,
    ) -> Result<Group, AppError> {
        let actor = find_actor(self.db, username).await?;
        require_role(&actor, ALL_ROLES)?;

        let repo = GroupRepository::new(self.db);
        let validator = GroupValidator::new(self.db);

        let persisted = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", id)))?;

        GroupValidator::check_group_edit_permissions(&actor, &persisted, &persisted.status)?;

        let merged = validator.merge_update(&persisted, params).await?;

        if merged.location != persisted.location {
            let relocated = Group {
                location: merged.location.clone(),
                ..persisted.clone()
            };
            GroupValidator::check_group_edit_permissions(&actor, &relocated, &persisted.status)?;
        }

        if !validator.is_valid_group_name(id, &merged.name).await? {
            return Err(ValidationError::DuplicateGroupName(merged.name).into());
        }

        let group = repo
            .update(id, GroupRecord::from_group(&merged))
            .await
            .map_err(|err| duplicate_name_or(err, &merged.name))?;

        tracing::info!("User {} updated group {} '{}'", actor.username, group.id, group.name);

        Ok(group)
    }

    /// Deletes a group without students.
    ///
    /// Only coordinators of the group's location and admins may delete groups. The
    /// group's events and teacher assignments are removed with it.
    ///
    /// # Returns
    /// - `Ok(())` - Group deleted
    /// - `Err(AppError::NotFound)` - No group with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - Role or location not allowed
    /// - `Err(AppError::ValidationErr(GroupHasStudents))` - The group still has students
    pub async fn delete_group(&self, id: i32, username: &str) -> Result<(), AppError> {
        let actor = find_actor(self.db, username).await?;
        require_role(&actor, GROUP_REMOVERS)?;

        let repo = GroupRepository::new(self.db);

        let group = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group {} not found", id)))?;

        GroupValidator::check_coordinator_location_to_manipulate_group(&actor, &group)?;

        if group.student_count > 0 {
            return Err(ValidationError::GroupHasStudents(id).into());
        }

        repo.delete(id).await.map_err(|err| match err.sql_err() {
            // A student was added after the count was read
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                ValidationError::GroupHasStudents(id).into()
            }
            _ => AppError::from(err),
        })?;

        tracing::info!("User {} deleted group {} '{}'", actor.username, id, group.name);

        Ok(())
    }
}

/// Maps a unique violation on the group name to the duplicate-name error.
fn duplicate_name_or(err: DbErr, name: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ValidationError::DuplicateGroupName(name.to_string()).into()
        }
        _ => err.into(),
    }
}
