use crate::server::{
    data::user::UserRepository,
    model::user::{CompleteRegistrationParam, IssueOtpParam, UpdateUserParam},
};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod complete_registration;
mod create_pending;
mod delete_stale_pending;
mod find_active_by_username;
mod get_active_paginated;
mod reissue_otp;
mod search_usernames;
mod taken;
mod update;
