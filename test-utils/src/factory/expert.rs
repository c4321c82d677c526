//! Expert factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an expert with the given name.
pub async fn create_expert_named(
    db: &DatabaseConnection,
    expert_name: impl Into<String>,
) -> Result<entity::expert::Model, DbErr> {
    entity::expert::ActiveModel {
        expert_name: ActiveValue::Set(expert_name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an expert with a unique name.
pub async fn create_expert(db: &DatabaseConnection) -> Result<entity::expert::Model, DbErr> {
    create_expert_named(db, format!("Expert {}", next_id())).await
}
