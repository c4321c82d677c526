//! Event factory.

use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an event for a group at the given timestamp.
pub async fn create_event(
    db: &DatabaseConnection,
    group_id: i32,
    event_type_id: i32,
    date_time: NaiveDateTime,
) -> Result<entity::event::Model, DbErr> {
    entity::event::ActiveModel {
        group_id: ActiveValue::Set(group_id),
        event_type_id: ActiveValue::Set(event_type_id),
        date_time: ActiveValue::Set(date_time),
        ..Default::default()
    }
    .insert(db)
    .await
}
