//! Group factory for creating test groups and teacher assignments.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let group = GroupFactory::new(&db, location.id, status.id)
///     .name("Alpha")
///     .teacher(teacher.id)
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location_id: i32,
    status_id: i32,
    start_date: Option<NaiveDate>,
    finish_date: Option<NaiveDate>,
    teachers: Vec<i32>,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Group {id}"` where id is auto-incremented
    /// - no dates, no teachers
    pub fn new(db: &'a DatabaseConnection, location_id: i32, status_id: i32) -> Self {
        Self {
            db,
            name: format!("Group {}", next_id()),
            location_id,
            status_id,
            start_date: None,
            finish_date: None,
            teachers: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn finish_date(mut self, finish_date: Option<NaiveDate>) -> Self {
        self.finish_date = finish_date;
        self
    }

    /// Assigns a teacher user to the group once it is inserted.
    pub fn teacher(mut self, user_id: i32) -> Self {
        self.teachers.push(user_id);
        self
    }

    /// Builds and inserts the group, then its teacher assignments.
    pub async fn build(self) -> Result<entity::student_group::Model, DbErr> {
        let group = entity::student_group::ActiveModel {
            name: ActiveValue::Set(self.name),
            location_id: ActiveValue::Set(self.location_id),
            status_id: ActiveValue::Set(self.status_id),
            start_date: ActiveValue::Set(self.start_date),
            finish_date: ActiveValue::Set(self.finish_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for user_id in self.teachers {
            assign_teacher(self.db, group.id, user_id).await?;
        }

        Ok(group)
    }
}

/// Creates a group with default values.
pub async fn create_group(
    db: &DatabaseConnection,
    location_id: i32,
    status_id: i32,
) -> Result<entity::student_group::Model, DbErr> {
    GroupFactory::new(db, location_id, status_id).build().await
}

/// Assigns a teacher to an existing group.
pub async fn assign_teacher(
    db: &DatabaseConnection,
    group_id: i32,
    user_id: i32,
) -> Result<entity::group_teacher::Model, DbErr> {
    entity::group_teacher::ActiveModel {
        group_id: ActiveValue::Set(group_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}
