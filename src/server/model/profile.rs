use crate::{
    model::profile::ProfileDto,
    server::model::{content::ContentDetail, user::UserSummary},
};

/// A user's own profile: follow counts plus every post with its engagement.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub summary: UserSummary,
    pub content: Vec<ContentDetail>,
}

impl Profile {
    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            username: self.summary.username,
            followers: self.summary.followers,
            following: self.summary.following,
            content: self
                .content
                .into_iter()
                .map(ContentDetail::into_profile_dto)
                .collect(),
        }
    }
}
