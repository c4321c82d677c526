//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories only
//! insert the row they are asked for; use [`helpers`] to create an entity together
//! with its dependencies.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let location = factory::create_location(&db).await?;
//! let teacher = factory::user::UserFactory::new(&db)
//!     .role("teacher")
//!     .location_id(Some(location.id))
//!     .build()
//!     .await?;
//! ```

pub mod english_level;
pub mod event;
pub mod event_type;
pub mod expert;
pub mod group;
pub mod helpers;
pub mod location;
pub mod status;
pub mod student;
pub mod user;

pub use english_level::create_english_level;
pub use event::create_event;
pub use event_type::create_event_type;
pub use expert::create_expert;
pub use group::create_group;
pub use location::create_location;
pub use status::create_status;
pub use student::create_student;
pub use user::create_user;
