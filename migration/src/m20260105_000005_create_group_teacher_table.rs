use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_user_table::User,
    m20260105_000004_create_student_group_table::StudentGroup,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupTeacher::Table)
                    .if_not_exists()
                    .col(integer(GroupTeacher::GroupId))
                    .col(integer(GroupTeacher::UserId))
                    .primary_key(
                        Index::create()
                            .col(GroupTeacher::GroupId)
                            .col(GroupTeacher::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_teacher_group_id")
                            .from(GroupTeacher::Table, GroupTeacher::GroupId)
                            .to(StudentGroup::Table, StudentGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_teacher_user_id")
                            .from(GroupTeacher::Table, GroupTeacher::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupTeacher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupTeacher {
    Table,
    GroupId,
    UserId,
}
