use thiserror::Error;

/// Internal issues with stored data or the codebase indicating unexpected behavior
/// and possible bugs. Always results in a 500 Internal Server Error with a generic
/// message returned to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A user row carries a role outside of teacher, coordinator and admin.
    #[error("User {user_id} has unknown role '{value}'")]
    UnknownRole {
        /// ID of the user row
        user_id: i32,
        /// The stored role text
        value: String,
    },
}
