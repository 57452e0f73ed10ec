mod comment;
mod content;
mod follows;
mod likes;
mod user;
