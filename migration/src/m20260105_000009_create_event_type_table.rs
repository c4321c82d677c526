use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventType::Table)
                    .if_not_exists()
                    .col(pk_auto(EventType::Id))
                    .col(string_uniq(EventType::Name))
                    .col(boolean(EventType::IsKeyDate).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventType {
    Table,
    Id,
    Name,
    IsKeyDate,
}
