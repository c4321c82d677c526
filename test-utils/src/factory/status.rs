//! Status factory for creating group lifecycle statuses.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a status with the given name.
pub async fn create_status_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::status::Model, DbErr> {
    entity::status::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a status with a unique `"active {id}"` name.
pub async fn create_status(db: &DatabaseConnection) -> Result<entity::status::Model, DbErr> {
    create_status_named(db, format!("active {}", next_id())).await
}
