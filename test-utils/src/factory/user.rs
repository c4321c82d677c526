//! User factory for creating test user entities.
//!
//! Users are created with a placeholder password hash that never verifies. Call
//! [`UserFactory::password`] when a test needs to log in.

use crate::factory::helpers::next_id;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let coordinator = UserFactory::new(&db)
///     .username("coordinator")
///     .role("coordinator")
///     .location_id(Some(location.id))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: String,
    role: String,
    location_id: Option<i32>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - password_hash: placeholder that fails verification
    /// - role: `"teacher"`
    /// - location_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            username: format!("user{}", next_id()),
            password_hash: "!".to_string(),
            role: "teacher".to_string(),
            location_id: None,
        }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Hashes and sets the user's password.
    ///
    /// # Panics
    /// Panics if argon2 fails to hash the password, which only happens with
    /// invalid hasher parameters.
    pub fn password(mut self, password: &str) -> Self {
        let salt = SaltString::generate(&mut OsRng);
        self.password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .expect("argon2 hashing with default params")
            .to_string();
        self
    }

    /// Sets the raw role text (`teacher`, `coordinator` or `admin`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the location the user belongs to.
    pub fn location_id(mut self, location_id: Option<i32>) -> Self {
        self.location_id = location_id;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            location_id: ActiveValue::Set(self.location_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a teacher with no location.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the given role at the given location.
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: &str,
    location_id: Option<i32>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .role(role)
        .location_id(location_id)
        .build()
        .await
}
