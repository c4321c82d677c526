//! Username and password authentication.

use argon2::{
    password_hash::{self, PasswordHash},
    Argon2, PasswordVerifier,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Service verifying login credentials against stored argon2 hashes.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a username and password.
    ///
    /// Unknown usernames, malformed stored hashes and wrong passwords all fail the
    /// same way so the response does not reveal which usernames exist.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Credentials do not match
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some((user, password_hash)) = UserRepository::new(self.db)
            .find_with_password_hash(username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let password = password.to_string();
        let verified =
            tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
                .await
                .map_err(|e| {
                    AppError::InternalError(format!("Password verification failed: {}", e))
                })?;

        match verified {
            Ok(true) => {}
            Ok(false) => return Err(AuthError::InvalidCredentials.into()),
            Err(e) => {
                tracing::warn!("Stored password hash of user {} is malformed: {}", user.id, e);
                return Err(AuthError::InvalidCredentials.into());
            }
        }

        tracing::info!("User {} logged in", user.username);

        Ok(user)
    }

    /// Gets the user with the given ID, if they still exist.
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db).find_by_id(user_id).await
    }
}

/// Checks a password against an argon2 PHC string. CPU bound, run off the async workers.
///
/// # Returns
/// - `Ok(bool)` - Whether the password matches
/// - `Err(password_hash::Error)` - The stored hash cannot be parsed
pub(super) fn verify_password(
    password: &str,
    password_hash: &str,
) -> Result<bool, password_hash::Error> {
    let parsed_hash = PasswordHash::new(password_hash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
