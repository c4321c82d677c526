use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    reference::{LocationDto, StatusDto},
    user::TeacherDto,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
    pub location: LocationDto,
    pub status: StatusDto,
    pub teachers: Vec<TeacherDto>,
    #[serde(with = "crate::model::date::option")]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "crate::model::date::option")]
    pub finish_date: Option<NaiveDate>,
    pub student_count: u64,
}

/// Body of `POST /groups`.
///
/// A missing location defaults to the creator's location and a missing status to
/// the initial lifecycle status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupDto {
    pub name: String,
    #[serde(default)]
    pub location_id: Option<i32>,
    #[serde(default)]
    pub status_id: Option<i32>,
    #[serde(default)]
    pub teacher_ids: Vec<i32>,
    #[serde(default, with = "crate::model::date::option")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "crate::model::date::option")]
    pub finish_date: Option<NaiveDate>,
}

/// Body of `PUT /groups/{id}`. Omitted or `null` fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGroupDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location_id: Option<i32>,
    #[serde(default)]
    pub status_id: Option<i32>,
    #[serde(default)]
    pub teacher_ids: Option<Vec<i32>>,
    #[serde(default, with = "crate::model::date::option")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "crate::model::date::option")]
    pub finish_date: Option<NaiveDate>,
}

/// Body of `POST /groups/filter`. Every criterion is optional; criteria combine with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupsFilterDto {
    #[serde(default)]
    pub locations: Option<Vec<i32>>,
    #[serde(default)]
    pub statuses: Option<Vec<i32>>,
    #[serde(default)]
    pub teacher_id: Option<i32>,
}
