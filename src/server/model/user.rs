//! User domain models.
//!
//! Users carry a closed [`Role`] parsed from the stored role text at the repository
//! boundary, so authorization code matches exhaustively instead of comparing strings.

use crate::{
    model::user::UserDto,
    server::{
        error::{internal::InternalError, AppError},
        model::location::Location,
    },
};

/// Role of an application user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Teacher,
    Coordinator,
    Admin,
}

impl Role {
    /// Parses the stored role text, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "teacher" => Some(Self::Teacher),
            "coordinator" => Some(Self::Coordinator),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Coordinator => "coordinator",
            Self::Admin => "admin",
        }
    }
}

/// Authenticated application user with their role and home location.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database ID of the user.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Role deciding which operations the user may perform.
    pub role: Role,
    /// Location the user works at; admins usually have none.
    pub location: Option<Location>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            role: self.role.as_str().to_string(),
            location: self.location.map(Location::into_dto),
        }
    }

    /// Converts an entity model and its optional location to a user domain model.
    ///
    /// # Arguments
    /// - `entity` - The user entity model from the database
    /// - `location` - The location entity the user references, if any
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownRole))` - Stored role is not a known role
    pub fn from_entity(
        entity: entity::user::Model,
        location: Option<entity::location::Model>,
    ) -> Result<Self, AppError> {
        let role = Role::parse(&entity.role).ok_or_else(|| InternalError::UnknownRole {
            user_id: entity.id,
            value: entity.role.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            role,
            location: location.map(Location::from_entity),
        })
    }

    pub fn location_id(&self) -> Option<i32> {
        self.location.as_ref().map(|location| location.id)
    }
}
