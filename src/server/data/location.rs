use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::location::Location;

pub struct LocationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Location>, DbErr> {
        let entity = entity::prelude::Location::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Location::from_entity))
    }

    /// Gets all locations ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Location>, DbErr> {
        let entities = entity::prelude::Location::find()
            .order_by_asc(entity::location::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Location::from_entity).collect())
    }
}
