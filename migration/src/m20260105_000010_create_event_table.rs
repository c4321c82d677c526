use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000004_create_student_group_table::StudentGroup,
    m20260105_000009_create_event_type_table::EventType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::GroupId))
                    .col(integer(Event::EventTypeId))
                    .col(date_time(Event::DateTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_group_id")
                            .from(Event::Table, Event::GroupId)
                            .to(StudentGroup::Table, StudentGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_event_type_id")
                            .from(Event::Table, Event::EventTypeId)
                            .to(EventType::Table, EventType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_group_id_date_time")
                    .table(Event::Table)
                    .col(Event::GroupId)
                    .col(Event::DateTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    GroupId,
    EventTypeId,
    DateTime,
}
