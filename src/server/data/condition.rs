//! Query condition builders for filtered lookups.
//!
//! Each builder returns a SeaORM `Condition` that can be combined with others and passed
//! to `QueryFilter::filter`. Event conditions on the event type assume the query joins
//! `event_type`, as `find_also_related(EventType)` does.

pub mod group {
    use sea_orm::{sea_query::Query, ColumnTrait, Condition};

    use crate::server::model::group::GroupsFilter;

    /// Groups located in any of the given locations.
    pub fn by_locations(location_ids: &[i32]) -> Condition {
        Condition::all().add(entity::student_group::Column::LocationId.is_in(location_ids.to_vec()))
    }

    /// Groups with any of the given statuses.
    pub fn by_statuses(status_ids: &[i32]) -> Condition {
        Condition::all().add(entity::student_group::Column::StatusId.is_in(status_ids.to_vec()))
    }

    /// Groups the given user is assigned to as a teacher.
    pub fn by_teacher(user_id: i32) -> Condition {
        Condition::all().add(
            entity::student_group::Column::Id.in_subquery(
                Query::select()
                    .column(entity::group_teacher::Column::GroupId)
                    .from(entity::group_teacher::Entity)
                    .and_where(entity::group_teacher::Column::UserId.eq(user_id))
                    .to_owned(),
            ),
        )
    }

    /// Combines every criterion set on the filter; an empty filter matches all groups.
    pub fn matching(filter: &GroupsFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(location_ids) = &filter.location_ids {
            condition = condition.add(by_locations(location_ids));
        }
        if let Some(status_ids) = &filter.status_ids {
            condition = condition.add(by_statuses(status_ids));
        }
        if let Some(teacher_id) = filter.teacher_id {
            condition = condition.add(by_teacher(teacher_id));
        }

        condition
    }
}

pub mod event {
    use chrono::NaiveDateTime;
    use sea_orm::{ColumnTrait, Condition};

    use crate::server::model::event::EventsFilter;

    /// Events whose type is a key date.
    pub fn key_dates() -> Condition {
        Condition::all().add(entity::event_type::Column::IsKeyDate.eq(true))
    }

    pub fn by_groups(group_ids: &[i32]) -> Condition {
        Condition::all().add(entity::event::Column::GroupId.is_in(group_ids.to_vec()))
    }

    /// Events between `start` and `finish`, both inclusive.
    pub fn between(start: NaiveDateTime, finish: NaiveDateTime) -> Condition {
        Condition::all().add(entity::event::Column::DateTime.between(start, finish))
    }

    pub fn matching(filter: &EventsFilter) -> Condition {
        let mut condition = by_groups(&filter.group_ids);

        if let Some((start, finish)) = filter.range {
            condition = condition.add(between(start, finish));
        }
        if filter.key_dates_only {
            condition = condition.add(key_dates());
        }

        condition
    }
}
