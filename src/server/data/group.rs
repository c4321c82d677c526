//! Group data repository for database operations.
//!
//! Groups are returned fully hydrated: location, status, assigned teachers and the
//! student count are fetched with one query per relation for the whole result set
//! and joined in memory. Writes touching the group row and its teacher assignments
//! run inside a single transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{
    data::condition,
    model::{
        group::{Group, GroupRecord, GroupsFilter, Teacher},
        location::Location,
        reference::Status,
    },
};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group and assigns its teachers.
    ///
    /// # Arguments
    /// - `record` - Column values and teacher IDs of the new group
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group with its relations
    /// - `Err(DbErr)` - Database error, including unique violations on the group name
    pub async fn create(&self, record: GroupRecord) -> Result<Group, DbErr> {
        let txn = self.db.begin().await?;

        let group = entity::student_group::ActiveModel {
            name: ActiveValue::Set(record.name),
            location_id: ActiveValue::Set(record.location_id),
            status_id: ActiveValue::Set(record.status_id),
            start_date: ActiveValue::Set(record.start_date),
            finish_date: ActiveValue::Set(record.finish_date),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_teachers(&txn, group.id, &record.teacher_ids).await?;

        txn.commit().await?;

        self.find_by_id(group.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Group with id {} not found after creation",
            group.id
        )))
    }

    /// Overwrites a group's columns and replaces its teacher assignments.
    ///
    /// # Returns
    /// - `Ok(Group)` - The updated group with its relations
    /// - `Err(DbErr::RecordNotFound)` - No group with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, id: i32, record: GroupRecord) -> Result<Group, DbErr> {
        let txn = self.db.begin().await?;

        entity::student_group::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(record.name),
            location_id: ActiveValue::Set(record.location_id),
            status_id: ActiveValue::Set(record.status_id),
            start_date: ActiveValue::Set(record.start_date),
            finish_date: ActiveValue::Set(record.finish_date),
        }
        .update(&txn)
        .await?;

        entity::prelude::GroupTeacher::delete_many()
            .filter(entity::group_teacher::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;
        insert_teachers(&txn, id, &record.teacher_ids).await?;

        txn.commit().await?;

        self.find_by_id(id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Group with id {} not found after update",
            id
        )))
    }

    /// Deletes a group along with its events and teacher assignments.
    ///
    /// Students are not removed; the foreign key rejects deleting a group that still
    /// has students, so callers check the student count first.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Event::delete_many()
            .filter(entity::event::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::GroupTeacher::delete_many()
            .filter(entity::group_teacher::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::StudentGroup::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let Some(group) = entity::prelude::StudentGroup::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.hydrate(vec![group]).await?.pop())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::StudentGroup::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the ID of the group with exactly this name, if any.
    pub async fn find_id_by_name(&self, name: &str) -> Result<Option<i32>, DbErr> {
        let group = entity::prelude::StudentGroup::find()
            .filter(entity::student_group::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(group.map(|group| group.id))
    }

    pub async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        self.get_matching(Condition::all()).await
    }

    pub async fn get_by_location_ids(&self, location_ids: &[i32]) -> Result<Vec<Group>, DbErr> {
        self.get_matching(condition::group::by_locations(location_ids))
            .await
    }

    pub async fn get_by_teacher(&self, user_id: i32) -> Result<Vec<Group>, DbErr> {
        self.get_matching(condition::group::by_teacher(user_id)).await
    }

    pub async fn get_by_filter(&self, filter: &GroupsFilter) -> Result<Vec<Group>, DbErr> {
        self.get_matching(condition::group::matching(filter)).await
    }

    /// Gets the names of all groups ordered by name.
    pub async fn get_names(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::StudentGroup::find()
            .select_only()
            .column(entity::student_group::Column::Name)
            .order_by_asc(entity::student_group::Column::Name)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    async fn get_matching(&self, condition: Condition) -> Result<Vec<Group>, DbErr> {
        let groups = entity::prelude::StudentGroup::find()
            .filter(condition)
            .order_by_asc(entity::student_group::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(groups).await
    }

    /// Attaches location, status, teachers and student count to each group row.
    async fn hydrate(
        &self,
        groups: Vec<entity::student_group::Model>,
    ) -> Result<Vec<Group>, DbErr> {
        if groups.is_empty() {
            return Ok(Vec::new());
        }

        let group_ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
        let location_ids: Vec<i32> = groups.iter().map(|g| g.location_id).collect();
        let status_ids: Vec<i32> = groups.iter().map(|g| g.status_id).collect();

        let locations: HashMap<i32, entity::location::Model> = entity::prelude::Location::find()
            .filter(entity::location::Column::Id.is_in(location_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|l| (l.id, l))
            .collect();

        let statuses: HashMap<i32, entity::status::Model> = entity::prelude::Status::find()
            .filter(entity::status::Column::Id.is_in(status_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        // Teacher assignments joined with the assigned users
        let assignments = entity::prelude::GroupTeacher::find()
            .filter(entity::group_teacher::Column::GroupId.is_in(group_ids.clone()))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::group_teacher::Column::UserId)
            .all(self.db)
            .await?;

        let mut teachers: HashMap<i32, Vec<Teacher>> = HashMap::new();
        for (assignment, user) in assignments {
            if let Some(user) = user {
                teachers.entry(assignment.group_id).or_default().push(Teacher {
                    id: user.id,
                    username: user.username,
                });
            }
        }

        let student_counts: HashMap<i32, i64> = entity::prelude::Student::find()
            .select_only()
            .column(entity::student::Column::GroupId)
            .column_as(entity::student::Column::Id.count(), "student_count")
            .filter(entity::student::Column::GroupId.is_in(group_ids))
            .group_by(entity::student::Column::GroupId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        groups
            .into_iter()
            .map(|group| {
                let location = locations.get(&group.location_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Location {} of group {} not found",
                        group.location_id, group.id
                    ))
                })?;
                let status = statuses.get(&group.status_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Status {} of group {} not found",
                        group.status_id, group.id
                    ))
                })?;

                Ok(Group {
                    id: group.id,
                    name: group.name,
                    location: Location::from_entity(location),
                    status: Status::from_entity(status),
                    teachers: teachers.remove(&group.id).unwrap_or_default(),
                    start_date: group.start_date,
                    finish_date: group.finish_date,
                    student_count: student_counts.get(&group.id).copied().unwrap_or(0) as u64,
                })
            })
            .collect()
    }
}

async fn insert_teachers<C: ConnectionTrait>(
    db: &C,
    group_id: i32,
    teacher_ids: &[i32],
) -> Result<(), DbErr> {
    for user_id in teacher_ids {
        entity::group_teacher::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            user_id: ActiveValue::Set(*user_id),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
