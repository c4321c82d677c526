//! Student data repository for database operations.
//!
//! Students are hydrated with their group name, English level and expert. Batch
//! inserts and updates run inside one transaction so a failing row leaves no
//! partial batch behind.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::{
    reference::{EnglishLevel, Expert},
    student::{Student, StudentRecord},
};

pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts all records in a single transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - The stored students in insertion order
    /// - `Err(DbErr)` - Database error; nothing from the batch is stored
    pub async fn create_many(&self, records: Vec<StudentRecord>) -> Result<Vec<Student>, DbErr> {
        let txn = self.db.begin().await?;

        let mut ids = Vec::with_capacity(records.len());
        for record in records {
            let student = active_model(record).insert(&txn).await?;
            ids.push(student.id);
        }

        txn.commit().await?;

        self.get_by_ids_in_order(&ids).await
    }

    /// Overwrites the given students in a single transaction.
    ///
    /// # Arguments
    /// - `updates` - Pairs of student ID and the new column values
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - The updated students in the given order
    /// - `Err(DbErr)` - Database error; no update from the batch is applied
    pub async fn update_many(
        &self,
        updates: Vec<(i32, StudentRecord)>,
    ) -> Result<Vec<Student>, DbErr> {
        let txn = self.db.begin().await?;

        let mut ids = Vec::with_capacity(updates.len());
        for (id, record) in updates {
            let mut student = active_model(record);
            student.id = ActiveValue::Unchanged(id);
            student.update(&txn).await?;
            ids.push(id);
        }

        txn.commit().await?;

        self.get_by_ids_in_order(&ids).await
    }

    /// Deletes a student.
    ///
    /// # Returns
    /// - `Ok(true)` - Student deleted
    /// - `Ok(false)` - No student with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        Ok(self
            .get_matching(Condition::all().add(entity::student::Column::Id.eq(id)))
            .await?
            .pop())
    }

    pub async fn get_by_group_id(&self, group_id: i32) -> Result<Vec<Student>, DbErr> {
        self.get_matching(Condition::all().add(entity::student::Column::GroupId.eq(group_id)))
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        self.get_matching(Condition::all()).await
    }

    async fn get_by_ids_in_order(&self, ids: &[i32]) -> Result<Vec<Student>, DbErr> {
        let mut by_id: HashMap<i32, Student> = self
            .get_matching(Condition::all().add(entity::student::Column::Id.is_in(ids.to_vec())))
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    async fn get_matching(&self, condition: Condition) -> Result<Vec<Student>, DbErr> {
        let students = entity::prelude::Student::find()
            .filter(condition)
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        if students.is_empty() {
            return Ok(Vec::new());
        }

        let group_ids: Vec<i32> = students.iter().map(|s| s.group_id).collect();
        let level_ids: Vec<i32> = students.iter().map(|s| s.english_level_id).collect();
        let expert_ids: Vec<i32> = students.iter().map(|s| s.expert_id).collect();

        let group_names: HashMap<i32, String> = entity::prelude::StudentGroup::find()
            .filter(entity::student_group::Column::Id.is_in(group_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|g| (g.id, g.name))
            .collect();

        let levels: HashMap<i32, entity::english_level::Model> =
            entity::prelude::EnglishLevel::find()
                .filter(entity::english_level::Column::Id.is_in(level_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|l| (l.id, l))
                .collect();

        let experts: HashMap<i32, entity::expert::Model> = entity::prelude::Expert::find()
            .filter(entity::expert::Column::Id.is_in(expert_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        students
            .into_iter()
            .map(|student| {
                let student_id = student.id;
                let missing = |what: &str, id: i32| {
                    DbErr::RecordNotFound(format!(
                        "{} {} of student {} not found",
                        what, id, student_id
                    ))
                };

                let group_name = group_names
                    .get(&student.group_id)
                    .cloned()
                    .ok_or_else(|| missing("Group", student.group_id))?;
                let level = levels
                    .get(&student.english_level_id)
                    .cloned()
                    .ok_or_else(|| missing("English level", student.english_level_id))?;
                let expert = experts
                    .get(&student.expert_id)
                    .cloned()
                    .ok_or_else(|| missing("Expert", student.expert_id))?;

                Ok(Student {
                    id: student.id,
                    group_id: student.group_id,
                    group_name,
                    first_name: student.first_name,
                    last_name: student.last_name,
                    english_level: EnglishLevel::from_entity(level),
                    expert: Expert::from_entity(expert),
                    entry_score: student.entry_score,
                    incoming_test: student.incoming_test,
                })
            })
            .collect()
    }
}

fn active_model(record: StudentRecord) -> entity::student::ActiveModel {
    entity::student::ActiveModel {
        group_id: ActiveValue::Set(record.group_id),
        first_name: ActiveValue::Set(record.first_name),
        last_name: ActiveValue::Set(record.last_name),
        english_level_id: ActiveValue::Set(record.english_level_id),
        expert_id: ActiveValue::Set(record.expert_id),
        entry_score: ActiveValue::Set(record.entry_score),
        incoming_test: ActiveValue::Set(record.incoming_test),
        ..Default::default()
    }
}
