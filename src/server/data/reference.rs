//! Repositories for reference data: statuses, English levels, experts and event types.
//!
//! Reference rows are small lookup tables seeded by migrations. Students reference
//! English levels and experts by ID over the JSON API and by name in student forms,
//! so both lookups are provided.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::reference::{EnglishLevel, EventType, Expert, Status};

pub struct StatusRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Status>, DbErr> {
        let entity = entity::prelude::Status::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Status::from_entity))
    }

    /// Finds the status with the given exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Status>, DbErr> {
        let entity = entity::prelude::Status::find()
            .filter(entity::status::Column::Name.eq(name))
            .order_by_asc(entity::status::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Status::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Status>, DbErr> {
        let entities = entity::prelude::Status::find()
            .order_by_asc(entity::status::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Status::from_entity).collect())
    }
}

pub struct EnglishLevelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnglishLevelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<EnglishLevel>, DbErr> {
        let entity = entity::prelude::EnglishLevel::find()
            .filter(entity::english_level::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(EnglishLevel::from_entity))
    }

    /// Returns the subset of the given IDs that exist.
    pub async fn existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::EnglishLevel::find()
            .filter(entity::english_level::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|level| level.id).collect())
    }

    /// Gets all English levels in ascending ID order, which is their proficiency order.
    pub async fn get_all(&self) -> Result<Vec<EnglishLevel>, DbErr> {
        let entities = entity::prelude::EnglishLevel::find()
            .order_by_asc(entity::english_level::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(EnglishLevel::from_entity).collect())
    }
}

pub struct ExpertRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpertRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_name(&self, expert_name: &str) -> Result<Option<Expert>, DbErr> {
        let entity = entity::prelude::Expert::find()
            .filter(entity::expert::Column::ExpertName.eq(expert_name))
            .one(self.db)
            .await?;

        Ok(entity.map(Expert::from_entity))
    }

    /// Returns the subset of the given IDs that exist.
    pub async fn existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Expert::find()
            .filter(entity::expert::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|expert| expert.id).collect())
    }

    /// Gets all experts ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Expert>, DbErr> {
        let entities = entity::prelude::Expert::find()
            .order_by_asc(entity::expert::Column::ExpertName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Expert::from_entity).collect())
    }
}

pub struct EventTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<EventType>, DbErr> {
        let entities = entity::prelude::EventType::find()
            .order_by_asc(entity::event_type::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(EventType::from_entity).collect())
    }
}
