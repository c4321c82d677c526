use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub english_level_id: i32,
    /// Expert who approved the student's entry test.
    pub expert_id: i32,
    pub entry_score: Option<f64>,
    pub incoming_test: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_group::Entity",
        from = "Column::GroupId",
        to = "super::student_group::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    StudentGroup,
    #[sea_orm(
        belongs_to = "super::english_level::Entity",
        from = "Column::EnglishLevelId",
        to = "super::english_level::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    EnglishLevel,
    #[sea_orm(
        belongs_to = "super::expert::Entity",
        from = "Column::ExpertId",
        to = "super::expert::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Expert,
}

impl Related<super::student_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentGroup.def()
    }
}

impl Related<super::english_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnglishLevel.def()
    }
}

impl Related<super::expert::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expert.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
