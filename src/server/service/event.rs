//! Read-only access to group events.

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, group::GroupRepository},
    error::AppError,
    model::{
        event::{Event, EventsFilter},
        user::User,
    },
    validator::{require_role, ALL_ROLES},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the key-date events of a group.
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Key-date events ordered by timestamp
    /// - `Err(AppError::NotFound)` - No group with that ID
    pub async fn get_key_events_by_group_id(
        &self,
        user: &User,
        group_id: i32,
    ) -> Result<Vec<Event>, AppError> {
        require_role(user, ALL_ROLES)?;
        self.ensure_group_exists(group_id).await?;

        self.get_key_events_by_group_ids(user, &[group_id]).await
    }

    pub async fn get_key_events_by_group_ids(
        &self,
        user: &User,
        group_ids: &[i32],
    ) -> Result<Vec<Event>, AppError> {
        self.get_events_by_filter(
            user,
            &EventsFilter {
                group_ids: group_ids.to_vec(),
                range: None,
                key_dates_only: true,
            },
        )
        .await
    }

    /// Gets the events of a group between `start` and `finish`, both inclusive.
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Events in range ordered by timestamp
    /// - `Err(AppError::NotFound)` - No group with that ID
    pub async fn get_events_by_group_id(
        &self,
        user: &User,
        group_id: i32,
        start: NaiveDateTime,
        finish: NaiveDateTime,
    ) -> Result<Vec<Event>, AppError> {
        require_role(user, ALL_ROLES)?;
        self.ensure_group_exists(group_id).await?;

        self.get_events_by_group_ids(user, &[group_id], start, finish)
            .await
    }

    pub async fn get_events_by_group_ids(
        &self,
        user: &User,
        group_ids: &[i32],
        start: NaiveDateTime,
        finish: NaiveDateTime,
    ) -> Result<Vec<Event>, AppError> {
        self.get_events_by_filter(
            user,
            &EventsFilter {
                group_ids: group_ids.to_vec(),
                range: Some((start, finish)),
                key_dates_only: false,
            },
        )
        .await
    }

    pub async fn get_events_by_filter(
        &self,
        user: &User,
        filter: &EventsFilter,
    ) -> Result<Vec<Event>, AppError> {
        require_role(user, ALL_ROLES)?;

        Ok(EventRepository::new(self.db).get_by_filter(filter).await?)
    }

    async fn ensure_group_exists(&self, group_id: i32) -> Result<(), AppError> {
        if !GroupRepository::new(self.db).exists(group_id).await? {
            return Err(AppError::NotFound(format!("Group {} not found", group_id)));
        }

        Ok(())
    }
}
