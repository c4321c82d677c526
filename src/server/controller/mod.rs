//! HTTP request handlers.
//!
//! Handlers resolve the logged-in user with `AuthGuard`, convert DTOs into
//! parameter types, call the matching service and convert the resulting domain
//! models back into DTOs.

pub mod auth;
pub mod event;
pub mod group;
pub mod reference;
pub mod student;

#[cfg(test)]
mod test;
