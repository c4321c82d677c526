use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_location_table::Location,
    m20260105_000003_create_status_table::Status,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentGroup::Id))
                    .col(string_uniq(StudentGroup::Name))
                    .col(integer(StudentGroup::LocationId))
                    .col(integer(StudentGroup::StatusId))
                    .col(date_null(StudentGroup::StartDate))
                    .col(date_null(StudentGroup::FinishDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_group_location_id")
                            .from(StudentGroup::Table, StudentGroup::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_group_status_id")
                            .from(StudentGroup::Table, StudentGroup::StatusId)
                            .to(Status::Table, Status::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentGroup {
    Table,
    Id,
    Name,
    LocationId,
    StatusId,
    StartDate,
    FinishDate,
}
