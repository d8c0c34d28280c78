pub use super::college::Entity as College;
pub use super::course::Entity as Course;
pub use super::user::Entity as User;
