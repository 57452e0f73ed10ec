use crate::server::data::follows::FollowRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_for_user;
mod get_followers;
