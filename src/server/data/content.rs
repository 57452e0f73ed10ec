//! Content data repository.
//!
//! Provides `ContentRepository` for post rows. Comment and like rows hanging off a
//! post are handled by their own repositories.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::page_has_rows,
    model::content::{Content, CreateContentParam},
};

pub struct ContentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new post.
    ///
    /// # Arguments
    /// - `param` - Owner, title, caption and stored file path
    ///
    /// # Returns
    /// - `Ok(Content)` - The created post
    /// - `Err(DbErr)` - Insert failed (e.g. owner does not exist)
    pub async fn create(&self, param: CreateContentParam) -> Result<Content, DbErr> {
        let entity = entity::content::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            username: ActiveValue::Set(param.username),
            title: ActiveValue::Set(param.title),
            caption: ActiveValue::Set(param.caption),
            file: ActiveValue::Set(param.file),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Content::from_entity(entity))
    }

    pub async fn find_by_id(&self, c_id: i32) -> Result<Option<Content>, DbErr> {
        let entity = entity::prelude::Content::find_by_id(c_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Content::from_entity))
    }

    /// Gets all posts one page at a time, ordered by id.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Posts per page
    ///
    /// # Returns
    /// - `Ok((posts, total))` - Posts on the page and the total number of posts
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<Content>, u64), DbErr> {
        let paginator = entity::prelude::Content::find()
            .order_by_asc(entity::content::Column::CId)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        if !page_has_rows(page, per_page, total) {
            return Ok((Vec::new(), total));
        }
        let posts = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Content::from_entity)
            .collect();

        Ok((posts, total))
    }

    /// Same as `get_paginated` restricted to one author's username.
    pub async fn get_by_username_paginated(
        &self,
        username: &str,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Content>, u64), DbErr> {
        let paginator = entity::prelude::Content::find()
            .filter(entity::content::Column::Username.eq(username))
            .order_by_asc(entity::content::Column::CId)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        if !page_has_rows(page, per_page, total) {
            return Ok((Vec::new(), total));
        }
        let posts = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Content::from_entity)
            .collect();

        Ok((posts, total))
    }

    /// Every post owned by a user, oldest first.
    pub async fn get_all_by_user(&self, user_id: i32) -> Result<Vec<Content>, DbErr> {
        let entities = entity::prelude::Content::find()
            .filter(entity::content::Column::UserId.eq(user_id))
            .order_by_asc(entity::content::Column::CId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Content::from_entity).collect())
    }

    /// Posts whose title contains `fragment`, ignoring case.
    pub async fn search_by_title(&self, fragment: &str) -> Result<Vec<Content>, DbErr> {
        let pattern = format!("%{}%", fragment.to_lowercase());

        let entities = entity::prelude::Content::find()
            .filter(Expr::expr(Func::lower(Expr::col(entity::content::Column::Title))).like(pattern))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Content::from_entity).collect())
    }

    /// Rewrites the denormalised owner username on all of a user's posts.
    pub async fn rename_owner(&self, user_id: i32, username: &str) -> Result<(), DbErr> {
        entity::prelude::Content::update_many()
            .filter(entity::content::Column::UserId.eq(user_id))
            .col_expr(entity::content::Column::Username, Expr::value(username))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, c_id: i32) -> Result<(), DbErr> {
        entity::prelude::Content::delete_by_id(c_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Content::delete_many()
            .filter(entity::content::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
