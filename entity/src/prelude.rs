pub use super::english_level::Entity as EnglishLevel;
pub use super::event::Entity as Event;
pub use super::event_type::Entity as EventType;
pub use super::expert::Entity as Expert;
pub use super::group_teacher::Entity as GroupTeacher;
pub use super::location::Entity as Location;
pub use super::status::Entity as Status;
pub use super::student::Entity as Student;
pub use super::student_group::Entity as StudentGroup;
pub use super::user::Entity as User;
