//! Event type factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an event type with a unique name and the given key-date flag.
pub async fn create_event_type_with_flag(
    db: &DatabaseConnection,
    is_key_date: bool,
) -> Result<entity::event_type::Model, DbErr> {
    entity::event_type::ActiveModel {
        name: ActiveValue::Set(format!("Event type {}", next_id())),
        is_key_date: ActiveValue::Set(is_key_date),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an ordinary (non key-date) event type.
pub async fn create_event_type(db: &DatabaseConnection) -> Result<entity::event_type::Model, DbErr> {
    create_event_type_with_flag(db, false).await
}
