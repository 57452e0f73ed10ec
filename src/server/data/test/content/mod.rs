use crate::server::{data::content::ContentRepository, model::content::CreateContentParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod rename_owner;
mod search_by_title;
