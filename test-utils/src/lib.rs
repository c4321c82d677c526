//! Classboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the classboard
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//!
//! Entity factories in [`factory`] insert rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_group() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_group_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (location, status, group) = factory::helpers::create_group_with_dependencies(db).await?;
//!     assert_eq!(group.location_id, location.id);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
