use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session (not logged in).
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user ID that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Username or password did not match.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The acting user may not perform the operation.
    ///
    /// Every denial shares this kind; the reason only selects the message.
    /// Results in a 403 Forbidden response.
    #[error("Access denied: {}", .0.message())]
    AccessDenied(DenialReason),
}

/// Why an operation was denied, each mapping to a message key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// The user's role is not among the roles allowed for the operation.
    RoleNotAllowed,
    /// A coordinator tried to delete or manipulate a group of another location.
    CoordinatorManipulateGroup,
    /// A teacher or coordinator tried to create a group in another location.
    CreateGroupAlienLocation,
    /// An assigned teacher edited the group from a different location.
    TeacherEditAlienLocation,
    /// A teacher edited a group they are not assigned to.
    TeacherEditNotAssigned,
    /// A teacher edited a graduated group.
    TeacherEditGroupGraduated,
    /// A coordinator edited a group of another location.
    CoordinatorEditAlienLocation,
    /// A coordinator added or updated a student of another location.
    CoordinatorManipulateStudent,
}

impl DenialReason {
    pub fn key(&self) -> &'static str {
        match self {
            Self::RoleNotAllowed => "auth.role.notAllowed",
            Self::CoordinatorManipulateGroup => "auth.group.delete.coordinator",
            Self::CreateGroupAlienLocation => "auth.group.create.alienLocation",
            Self::TeacherEditAlienLocation => "auth.group.edit.teacher.alienLocation",
            Self::TeacherEditNotAssigned => "auth.group.edit.teacher.notAssigned",
            Self::TeacherEditGroupGraduated => "auth.group.edit.teacher.groupGraduated",
            Self::CoordinatorEditAlienLocation => "auth.group.edit.coordinator.alienLocation",
            Self::CoordinatorManipulateStudent => "auth.student.coordinator",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::RoleNotAllowed => "Your role does not allow this operation",
            Self::CoordinatorManipulateGroup => {
                "Coordinators can only manage groups of their own location"
            }
            Self::CreateGroupAlienLocation => "Groups can only be created in your own location",
            Self::TeacherEditAlienLocation => {
                "Teachers can only edit groups located in their own location"
            }
            Self::TeacherEditNotAssigned => "Teachers can only edit groups they are assigned to",
            Self::TeacherEditGroupGraduated => "Teachers cannot edit graduated groups",
            Self::CoordinatorEditAlienLocation => {
                "Coordinators can only edit groups of their own location"
            }
            Self::CoordinatorManipulateStudent => {
                "Coordinators can only manage students of their own location"
            }
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics.
///
/// # Returns
/// - 401 Unauthorized - For missing sessions, unknown users and bad credentials
/// - 403 Forbidden - For `AccessDenied`, with the reason's message and key
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("You need to log in")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid username or password")),
            )
                .into_response(),
            Self::AccessDenied(reason) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::with_code(reason.message(), reason.key())),
            )
                .into_response(),
        }
    }
}
