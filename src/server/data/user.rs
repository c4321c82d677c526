//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for looking up application users together
//! with their location. Stored role text is parsed into a `Role` on the way out, which
//! is why these methods return `AppError` rather than a plain `DbErr`.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{error::AppError, model::user::User};

/// Repository providing read access to users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with their location
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let result = entity::prelude::User::find_by_id(user_id)
            .find_also_related(entity::prelude::Location)
            .one(self.db)
            .await?;

        result
            .map(|(user, location)| User::from_entity(user, location))
            .transpose()
    }

    /// Finds a user by their unique username.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with their location
    /// - `Ok(None)` - No user with that username
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .find_with_password_hash(username)
            .await?
            .map(|(user, _)| user))
    }

    /// Finds a user by username together with their stored password hash.
    ///
    /// Only used for verifying login credentials.
    pub async fn find_with_password_hash(
        &self,
        username: &str,
    ) -> Result<Option<(User, String)>, AppError> {
        let result = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .find_also_related(entity::prelude::Location)
            .one(self.db)
            .await?;

        let Some((user, location)) = result else {
            return Ok(None);
        };

        let password_hash = user.password_hash.clone();
        let user = User::from_entity(user, location)?;

        Ok(Some((user, password_hash)))
    }

    /// Gets the users with the given IDs, ordered by ID.
    ///
    /// IDs without a matching user are skipped; callers compare lengths to detect them.
    pub async fn get_by_ids(&self, user_ids: &[i32]) -> Result<Vec<User>, AppError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.to_vec()))
            .find_also_related(entity::prelude::Location)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        results
            .into_iter()
            .map(|(user, location)| User::from_entity(user, location))
            .collect()
    }
}
