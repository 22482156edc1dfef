pub use super::activity::Entity as Activity;
pub use super::analysis::Entity as Analysis;
pub use super::document::Entity as Document;
pub use super::user::Entity as User;
