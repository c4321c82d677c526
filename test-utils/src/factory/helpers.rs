//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a group along with the location and status it references.
///
/// # Returns
/// - `Ok((location, status, group))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::location::Model,
        entity::status::Model,
        entity::student_group::Model,
    ),
    DbErr,
> {
    let location = crate::factory::location::create_location(db).await?;
    let status = crate::factory::status::create_status(db).await?;
    let group = crate::factory::group::create_group(db, location.id, status.id).await?;

    Ok((location, status, group))
}

/// Creates a student along with its group, English level and expert.
///
/// # Returns
/// - `Ok((group, student))` - The created group and student
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::student_group::Model, entity::student::Model), DbErr> {
    let (_, _, group) = create_group_with_dependencies(db).await?;
    let level = crate::factory::english_level::create_english_level(db).await?;
    let expert = crate::factory::expert::create_expert(db).await?;
    let student = crate::factory::student::create_student(db, group.id, level.id, expert.id).await?;

    Ok((group, student))
}
