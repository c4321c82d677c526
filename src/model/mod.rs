//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON wire format. Server-side domain models convert to and
//! from them at the controller boundary.

pub mod api;
pub mod date;
pub mod event;
pub mod group;
pub mod reference;
pub mod student;
pub mod user;
