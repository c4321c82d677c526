use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expert::Table)
                    .if_not_exists()
                    .col(pk_auto(Expert::Id))
                    .col(string_uniq(Expert::ExpertName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expert::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Expert {
    Table,
    Id,
    ExpertName,
}
