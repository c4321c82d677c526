//! Location factory for creating test location entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let location = LocationFactory::new(&db).name("Lviv").build().await?;
/// ```
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    coordinator_id: Option<i32>,
}

impl<'a> LocationFactory<'a> {
    /// Creates a new LocationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Location {id}"` where id is auto-incremented
    /// - coordinator_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Location {}", next_id()),
            coordinator_id: None,
        }
    }

    /// Sets the location name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the coordinator user ID.
    pub fn coordinator_id(mut self, coordinator_id: Option<i32>) -> Self {
        self.coordinator_id = coordinator_id;
        self
    }

    /// Builds and inserts the location entity into the database.
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        entity::location::ActiveModel {
            name: ActiveValue::Set(self.name),
            coordinator_id: ActiveValue::Set(self.coordinator_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a location with default values.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db).build().await
}
