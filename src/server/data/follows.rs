//! Follow relationship repository.
//!
//! A row `(follower_id, following_id)` means the follower receives the followed
//! user's new-post notifications.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{data::user::UserRepository, model::follow::FollowEntry};

pub struct FollowRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FollowRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Follows::find()
            .filter(entity::follows::Column::FollowerId.eq(follower_id))
            .filter(entity::follows::Column::FollowingId.eq(following_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, follower_id: i32, following_id: i32) -> Result<(), DbErr> {
        entity::follows::ActiveModel {
            follower_id: ActiveValue::Set(follower_id),
            following_id: ActiveValue::Set(following_id),
            followed_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a follow.
    ///
    /// # Returns
    /// - `Ok(true)` - The relationship existed and was removed
    /// - `Ok(false)` - There was nothing to remove
    pub async fn delete(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Follows::delete_many()
            .filter(entity::follows::Column::FollowerId.eq(follower_id))
            .filter(entity::follows::Column::FollowingId.eq(following_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Number of accounts following `user_id`.
    pub async fn count_followers(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Follows::find()
            .filter(entity::follows::Column::FollowingId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Number of accounts `user_id` follows.
    pub async fn count_following(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Follows::find()
            .filter(entity::follows::Column::FollowerId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Ids of everyone following `user_id`, oldest follow first.
    pub async fn follower_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::Follows::find()
            .filter(entity::follows::Column::FollowingId.eq(user_id))
            .order_by_asc(entity::follows::Column::FollowedAt)
            .order_by_asc(entity::follows::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.follower_id).collect())
    }

    /// Followers of `user_id` with the time each follow started.
    pub async fn get_followers(&self, user_id: i32) -> Result<Vec<FollowEntry>, DbErr> {
        let rows = entity::prelude::Follows::find()
            .filter(entity::follows::Column::FollowingId.eq(user_id))
            .order_by_asc(entity::follows::Column::FollowedAt)
            .order_by_asc(entity::follows::Column::Id)
            .all(self.db)
            .await?;

        let pairs = rows
            .into_iter()
            .map(|row| (row.follower_id, row.followed_at))
            .collect();
        self.resolve_usernames(pairs).await
    }

    /// Accounts `user_id` follows with the time each follow started.
    pub async fn get_following(&self, user_id: i32) -> Result<Vec<FollowEntry>, DbErr> {
        let rows = entity::prelude::Follows::find()
            .filter(entity::follows::Column::FollowerId.eq(user_id))
            .order_by_asc(entity::follows::Column::FollowedAt)
            .order_by_asc(entity::follows::Column::Id)
            .all(self.db)
            .await?;

        let pairs = rows
            .into_iter()
            .map(|row| (row.following_id, row.followed_at))
            .collect();
        self.resolve_usernames(pairs).await
    }

    /// Deletes every follow row the user appears in, on either side.
    pub async fn delete_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Follows::delete_many()
            .filter(
                Condition::any()
                    .add(entity::follows::Column::FollowerId.eq(user_id))
                    .add(entity::follows::Column::FollowingId.eq(user_id)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Swaps user ids for usernames, dropping accounts that are no longer active.
    async fn resolve_usernames(
        &self,
        pairs: Vec<(i32, chrono::DateTime<Utc>)>,
    ) -> Result<Vec<FollowEntry>, DbErr> {
        let ids = pairs.iter().map(|(id, _)| *id).collect();
        let usernames: HashMap<i32, String> = UserRepository::new(self.db)
            .usernames_for(ids)
            .await?
            .into_iter()
            .collect();

        Ok(pairs
            .into_iter()
            .filter_map(|(id, followed_at)| {
                usernames.get(&id).map(|username| FollowEntry {
                    username: username.clone(),
                    followed_at,
                })
            })
            .collect())
    }
}
