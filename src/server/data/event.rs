use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{
    data::condition,
    model::{event::Event, event::EventsFilter, reference::EventType},
};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets events matching the filter ordered by timestamp.
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Matching events, empty when no group is given
    /// - `Err(DbErr)` - Database error or an event whose type is missing
    pub async fn get_by_filter(&self, filter: &EventsFilter) -> Result<Vec<Event>, DbErr> {
        if filter.group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = entity::prelude::Event::find()
            .find_also_related(entity::prelude::EventType)
            .filter(condition::event::matching(filter))
            .order_by_asc(entity::event::Column::DateTime)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        results
            .into_iter()
            .map(|(event, event_type)| {
                let event_type = event_type.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Event type {} of event {} not found",
                        event.event_type_id, event.id
                    ))
                })?;

                Ok(Event {
                    id: event.id,
                    group_id: event.group_id,
                    event_type: EventType::from_entity(event_type),
                    date_time: event.date_time,
                })
            })
            .collect()
    }
}
