pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_location_table;
mod m20260105_000002_create_user_table;
mod m20260105_000003_create_status_table;
mod m20260105_000004_create_student_group_table;
mod m20260105_000005_create_group_teacher_table;
mod m20260105_000006_create_english_level_table;
mod m20260105_000007_create_expert_table;
mod m20260105_000008_create_student_table;
mod m20260105_000009_create_event_type_table;
mod m20260105_000010_create_event_table;
mod m20260105_000011_seed_reference_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_location_table::Migration),
            Box::new(m20260105_000002_create_user_table::Migration),
            Box::new(m20260105_000003_create_status_table::Migration),
            Box::new(m20260105_000004_create_student_group_table::Migration),
            Box::new(m20260105_000005_create_group_teacher_table::Migration),
            Box::new(m20260105_000006_create_english_level_table::Migration),
            Box::new(m20260105_000007_create_expert_table::Migration),
            Box::new(m20260105_000008_create_student_table::Migration),
            Box::new(m20260105_000009_create_event_type_table::Migration),
            Box::new(m20260105_000010_create_event_table::Migration),
            Box::new(m20260105_000011_seed_reference_data::Migration),
        ]
    }
}
