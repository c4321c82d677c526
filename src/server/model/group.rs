//! Group domain models and parameters.
//!
//! A group is loaded together with its location, status, assigned teachers and student
//! count. Updates arrive as partial patches: [`UpdateGroupParams`] carries the raw IDs
//! from the request, which the validator resolves into a [`GroupPatch`] before merging
//! it onto the persisted group.

use chrono::NaiveDate;

use crate::{
    model::{
        group::{CreateGroupDto, GroupDto, GroupsFilterDto, UpdateGroupDto},
        user::TeacherDto,
    },
    server::model::{location::Location, reference::Status},
};

/// Teacher assigned to a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: i32,
    pub username: String,
}

impl Teacher {
    pub fn into_dto(self) -> TeacherDto {
        TeacherDto {
            id: self.id,
            username: self.username,
        }
    }
}

/// Cohort of students at a location.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    /// Unique group name.
    pub name: String,
    pub location: Location,
    pub status: Status,
    /// Teachers assigned to the group, ordered by user ID.
    pub teachers: Vec<Teacher>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    /// Number of students currently in the group.
    pub student_count: u64,
}

impl Group {
    /// Whether the user with the given ID is assigned as a teacher of this group.
    pub fn has_teacher(&self, user_id: i32) -> bool {
        self.teachers.iter().any(|teacher| teacher.id == user_id)
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
            location: self.location.into_dto(),
            status: self.status.into_dto(),
            teachers: self.teachers.into_iter().map(Teacher::into_dto).collect(),
            start_date: self.start_date,
            finish_date: self.finish_date,
            student_count: self.student_count,
        }
    }
}

/// Parameters for creating a group.
///
/// Missing location and status are filled in by the service: the location defaults
/// to the acting user's and the status to the initial status.
#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    pub name: String,
    pub location_id: Option<i32>,
    pub status_id: Option<i32>,
    pub teacher_ids: Vec<i32>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
}

impl CreateGroupParams {
    pub fn from_dto(dto: CreateGroupDto) -> Self {
        Self {
            name: dto.name,
            location_id: dto.location_id,
            status_id: dto.status_id,
            teacher_ids: dto.teacher_ids,
            start_date: dto.start_date,
            finish_date: dto.finish_date,
        }
    }
}

/// Partial update of a group as received from the client.
///
/// `None` means "keep the persisted value".
#[derive(Debug, Clone, Default)]
pub struct UpdateGroupParams {
    pub name: Option<String>,
    pub location_id: Option<i32>,
    pub status_id: Option<i32>,
    pub teacher_ids: Option<Vec<i32>>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
}

impl UpdateGroupParams {
    pub fn from_dto(dto: UpdateGroupDto) -> Self {
        Self {
            name: dto.name,
            location_id: dto.location_id,
            status_id: dto.status_id,
            teacher_ids: dto.teacher_ids,
            start_date: dto.start_date,
            finish_date: dto.finish_date,
        }
    }
}

/// Partial update with every referenced ID resolved to its domain model.
#[derive(Debug, Clone, Default)]
pub struct GroupPatch {
    pub name: Option<String>,
    pub location: Option<Location>,
    pub status: Option<Status>,
    pub teachers: Option<Vec<Teacher>>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
}

impl GroupPatch {
    /// Merges the patch onto a persisted group.
    ///
    /// Every field absent from the patch takes the persisted value. The group's ID
    /// and student count always come from the persisted group.
    pub fn merge_onto(&self, group: &Group) -> Group {
        Group {
            id: group.id,
            name: self.name.clone().unwrap_or_else(|| group.name.clone()),
            location: self
                .location
                .clone()
                .unwrap_or_else(|| group.location.clone()),
            status: self.status.clone().unwrap_or_else(|| group.status.clone()),
            teachers: self
                .teachers
                .clone()
                .unwrap_or_else(|| group.teachers.clone()),
            start_date: self.start_date.or(group.start_date),
            finish_date: self.finish_date.or(group.finish_date),
            student_count: group.student_count,
        }
    }
}

/// Column values of a group row together with its teacher assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRecord {
    pub name: String,
    pub location_id: i32,
    pub status_id: i32,
    pub teacher_ids: Vec<i32>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
}

impl GroupRecord {
    pub fn from_group(group: &Group) -> Self {
        Self {
            name: group.name.clone(),
            location_id: group.location.id,
            status_id: group.status.id,
            teacher_ids: group.teachers.iter().map(|teacher| teacher.id).collect(),
            start_date: group.start_date,
            finish_date: group.finish_date,
        }
    }
}

/// Criteria for filtering groups. Every criterion that is set must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupsFilter {
    pub location_ids: Option<Vec<i32>>,
    pub status_ids: Option<Vec<i32>>,
    pub teacher_id: Option<i32>,
}

impl GroupsFilter {
    pub fn from_dto(dto: GroupsFilterDto) -> Self {
        Self {
            location_ids: dto.locations,
            status_ids: dto.statuses,
            teacher_id: dto.teacher_id,
        }
    }
}
