use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        location::LocationRepository,
        reference::{EnglishLevelRepository, EventTypeRepository, ExpertRepository, StatusRepository},
    },
    error::AppError,
    model::{
        location::Location,
        reference::{EnglishLevel, EventType, Expert, Status},
    },
};

/// Lists the reference data clients choose from.
pub struct ReferenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_locations(&self) -> Result<Vec<Location>, AppError> {
        Ok(LocationRepository::new(self.db).get_all().await?)
    }

    pub async fn get_statuses(&self) -> Result<Vec<Status>, AppError> {
        Ok(StatusRepository::new(self.db).get_all().await?)
    }

    pub async fn get_english_levels(&self) -> Result<Vec<EnglishLevel>, AppError> {
        Ok(EnglishLevelRepository::new(self.db).get_all().await?)
    }

    pub async fn get_experts(&self) -> Result<Vec<Expert>, AppError> {
        Ok(ExpertRepository::new(self.db).get_all().await?)
    }

    pub async fn get_event_types(&self) -> Result<Vec<EventType>, AppError> {
        Ok(EventTypeRepository::new(self.db).get_all().await?)
    }
}
