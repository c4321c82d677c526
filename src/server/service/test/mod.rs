use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

mod group;
mod student;

/// Loads the domain user for a factory-created user row.
async fn load_user(db: &DatabaseConnection, id: i32) -> Result<User, AppError> {
    Ok(UserRepository::new(db)
        .find_by_id(id)
        .await?
        .expect("factory user exists"))
}
