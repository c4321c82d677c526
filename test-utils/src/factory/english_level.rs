//! English level factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an English level with the given name.
pub async fn create_english_level_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::english_level::Model, DbErr> {
    entity::english_level::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an English level with a unique name.
pub async fn create_english_level(
    db: &DatabaseConnection,
) -> Result<entity::english_level::Model, DbErr> {
    create_english_level_named(db, format!("Level {}", next_id())).await
}
