//! SeaORM entity models for the classboard schema.
//!
//! Tables mirror the migrations in the `migration` crate. Relations are declared
//! for foreign keys only; the location coordinator is a plain nullable column to
//! avoid a user/location reference cycle.

pub mod prelude;

pub mod english_level;
pub mod event;
pub mod event_type;
pub mod expert;
pub mod group_teacher;
pub mod location;
pub mod status;
pub mod student;
pub mod student_group;
pub mod user;
