pub use super::comment::Entity as Comment;
pub use super::content::Entity as Content;
pub use super::follows::Entity as Follows;
pub use super::likes::Entity as Likes;
pub use super::registration::Entity as Registration;
