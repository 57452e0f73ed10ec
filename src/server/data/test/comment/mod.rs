use crate::server::data::comment::CommentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod texts_for_post;
