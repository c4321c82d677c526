use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EnglishLevel::Table)
                    .if_not_exists()
                    .col(pk_auto(EnglishLevel::Id))
                    .col(string_uniq(EnglishLevel::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EnglishLevel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EnglishLevel {
    Table,
    Id,
    Name,
}
