use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Mandatory student attributes, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    FirstName,
    LastName,
    EnglishLevel,
    Expert,
}

impl StudentField {
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "illegalArgs.student.firstName",
            Self::LastName => "illegalArgs.student.lastName",
            Self::EnglishLevel => "illegalArgs.student.englishLevel",
            Self::Expert => "illegalArgs.student.expert",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::EnglishLevel => "English level",
            Self::Expert => "expert who approved the test",
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Another group already uses the name.
    #[error("Group with name '{0}' already exists")]
    DuplicateGroupName(String),

    /// A mandatory student attribute is missing.
    #[error("Student {} is required", .0.label())]
    MissingStudentField(StudentField),

    /// A user listed as group teacher does not have the teacher role.
    #[error("User {0} is not a teacher")]
    NotATeacher(i32),

    /// The group still has students and cannot be deleted.
    ///
    /// Reported as 409 Conflict rather than 400.
    #[error("Group {0} still has students")]
    GroupHasStudents(i32),

    /// No status was given and the initial status does not exist.
    #[error("Group status is required")]
    MissingGroupStatus,
}

impl ValidationError {
    pub fn key(&self) -> &'static str {
        match self {
            Self::DuplicateGroupName(_) => "validation.group.name.duplicate",
            Self::MissingStudentField(field) => field.key(),
            Self::GroupHasStudents(_) => "validation.group.delete.hasStudents",
            Self::NotATeacher(_) => "validation.group.teacher.role",
            Self::MissingGroupStatus => "validation.group.status.missing",
        }
    }
}

/// Converts validation errors into responses carrying the message and its key.
///
/// # Returns
/// - 409 Conflict - For `GroupHasStudents`
/// - 400 Bad Request - For all other violations
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::GroupHasStudents(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };
        let key = self.key();
        (
            status,
            Json(ErrorDto::with_code(self.to_string(), key)),
        )
            .into_response()
    }
}
