use sea_orm::DatabaseConnection;

use crate::server::{
    data::group::GroupRepository,
    error::AppError,
    model::group::Group,
    service::find_actor,
    validator::{require_role, TEACHERS_ONLY},
};

/// Group queries from the perspective of a teacher.
pub struct TeacherGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the groups the teacher is assigned to.
    ///
    /// # Returns
    /// - `Ok(Vec<Group>)` - Assigned groups ordered by ID
    /// - `Err(AppError::NotFound)` - No user with that username
    /// - `Err(AppError::AuthErr(AccessDenied))` - The user is not a teacher
    pub async fn get_all_groups_of_the_teacher(
        &self,
        username: &str,
    ) -> Result<Vec<Group>, AppError> {
        let teacher = find_actor(self.db, username).await?;
        require_role(&teacher, TEACHERS_ONLY)?;

        Ok(GroupRepository::new(self.db)
            .get_by_teacher(teacher.id)
            .await?)
    }
}
