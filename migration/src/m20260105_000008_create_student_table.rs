use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000004_create_student_group_table::StudentGroup,
    m20260105_000006_create_english_level_table::EnglishLevel,
    m20260105_000007_create_expert_table::Expert,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(integer(Student::GroupId))
                    .col(string(Student::FirstName))
                    .col(string(Student::LastName))
                    .col(integer(Student::EnglishLevelId))
                    .col(integer(Student::ExpertId))
                    .col(double_null(Student::EntryScore))
                    .col(boolean_null(Student::IncomingTest))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_group_id")
                            .from(Student::Table, Student::GroupId)
                            .to(StudentGroup::Table, StudentGroup::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_english_level_id")
                            .from(Student::Table, Student::EnglishLevelId)
                            .to(EnglishLevel::Table, EnglishLevel::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_expert_id")
                            .from(Student::Table, Student::ExpertId)
                            .to(Expert::Table, Expert::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    GroupId,
    FirstName,
    LastName,
    EnglishLevelId,
    ExpertId,
    EntryScore,
    IncomingTest,
}
