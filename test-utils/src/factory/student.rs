//! Student factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    group_id: i32,
    english_level_id: i32,
    expert_id: i32,
    first_name: String,
    last_name: String,
    entry_score: Option<f64>,
    incoming_test: Option<bool>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Student"`, last_name: `"{id}"`
    /// - entry_score and incoming_test unset
    pub fn new(
        db: &'a DatabaseConnection,
        group_id: i32,
        english_level_id: i32,
        expert_id: i32,
    ) -> Self {
        Self {
            db,
            group_id,
            english_level_id,
            expert_id,
            first_name: "Student".to_string(),
            last_name: next_id().to_string(),
            entry_score: None,
            incoming_test: None,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn entry_score(mut self, entry_score: Option<f64>) -> Self {
        self.entry_score = entry_score;
        self
    }

    pub fn incoming_test(mut self, incoming_test: Option<bool>) -> Self {
        self.incoming_test = incoming_test;
        self
    }

    /// Builds and inserts the student entity into the database.
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            group_id: ActiveValue::Set(self.group_id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            english_level_id: ActiveValue::Set(self.english_level_id),
            expert_id: ActiveValue::Set(self.expert_id),
            entry_score: ActiveValue::Set(self.entry_score),
            incoming_test: ActiveValue::Set(self.incoming_test),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
pub async fn create_student(
    db: &DatabaseConnection,
    group_id: i32,
    english_level_id: i32,
    expert_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, group_id, english_level_id, expert_id)
        .build()
        .await
}
