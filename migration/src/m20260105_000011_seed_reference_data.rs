use sea_orm_migration::prelude::*;

use super::{
    m20260105_000003_create_status_table::Status,
    m20260105_000006_create_english_level_table::EnglishLevel,
    m20260105_000009_create_event_type_table::EventType,
};

const STATUSES: [&str; 4] = ["forming", "planned", "active", "graduated"];
const ENGLISH_LEVELS: [&str; 6] = [
    "Elementary",
    "Pre-Intermediate",
    "Intermediate",
    "Intermediate High",
    "Upper-Intermediate",
    "Advanced",
];
const EVENT_TYPES: [(&str, bool); 5] = [
    ("Lecture", false),
    ("Practice", false),
    ("Start", true),
    ("Demo", true),
    ("Graduation", true),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut statuses = Query::insert()
            .into_table(Status::Table)
            .columns([Status::Name])
            .to_owned();
        for name in STATUSES {
            statuses.values_panic([name.into()]);
        }
        manager.exec_stmt(statuses).await?;

        let mut levels = Query::insert()
            .into_table(EnglishLevel::Table)
            .columns([EnglishLevel::Name])
            .to_owned();
        for name in ENGLISH_LEVELS {
            levels.values_panic([name.into()]);
        }
        manager.exec_stmt(levels).await?;

        let mut event_types = Query::insert()
            .into_table(EventType::Table)
            .columns([EventType::Name, EventType::IsKeyDate])
            .to_owned();
        for (name, is_key_date) in EVENT_TYPES {
            event_types.values_panic([name.into(), is_key_date.into()]);
        }
        manager.exec_stmt(event_types).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(EventType::Table)
                    .cond_where(Expr::col(EventType::Name).is_in(EVENT_TYPES.map(|(n, _)| n)))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(EnglishLevel::Table)
                    .cond_where(Expr::col(EnglishLevel::Name).is_in(ENGLISH_LEVELS))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Status::Table)
                    .cond_where(Expr::col(Status::Name).is_in(STATUSES))
                    .to_owned(),
            )
            .await
    }
}
