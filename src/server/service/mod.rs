//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Authorization**: Every operation starts with the role gate, followed by the
//!   location and assignment rules of the validators
//! - **Business Logic**: Implementing core business rules and validation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod event;
pub mod group;
pub mod reference;
pub mod student;
pub mod teacher_group;

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Resolves the acting user by username.
///
/// # Returns
/// - `Ok(User)` - The acting user
/// - `Err(AppError::NotFound)` - No user with that username
async fn find_actor(db: &DatabaseConnection, username: &str) -> Result<User, AppError> {
    UserRepository::new(db)
        .find_by_username(username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))
}

#[cfg(test)]
mod test;
