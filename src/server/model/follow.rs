use chrono::{DateTime, Utc};

use crate::{model::profile::FollowEntryDto, server::model::content::DISPLAY_TIME_FORMAT};

/// The other side of a follow relationship and when it started.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowEntry {
    pub username: String,
    pub followed_at: DateTime<Utc>,
}

impl FollowEntry {
    pub fn into_dto(self) -> FollowEntryDto {
        FollowEntryDto {
            username: self.username,
            followed_since: self.followed_at.format(DISPLAY_TIME_FORMAT).to_string(),
        }
    }
}
