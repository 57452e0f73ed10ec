//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for the `registrations` table. It covers
//! both lifecycle states of a row: pending registrations driven by the OTP flow and
//! active accounts used everywhere else.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::page_has_rows,
    error::AppError,
    model::user::{CompleteRegistrationParam, IssueOtpParam, Registration, UpdateUserParam, User},
};

/// Repository providing database operations for registrations and user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a registration row by id regardless of its state.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<Registration>, DbErr> {
        let entity = entity::prelude::Registration::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Registration::from_entity))
    }

    /// Finds a registration row by email regardless of its state.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Registration>, DbErr> {
        let entity = entity::prelude::Registration::find()
            .filter(entity::registration::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Registration::from_entity))
    }

    /// Finds an active account by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Active account found
    /// - `Ok(None)` - No row, or the row is still a pending registration
    /// - `Err(AppError)` - Database error or an active row without credentials
    pub async fn find_active_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::Registration::find_by_id(user_id)
            .filter(entity::registration::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds an active account by its exact username.
    pub async fn find_active_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::Registration::find()
            .filter(entity::registration::Column::Username.eq(username))
            .filter(entity::registration::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Checks whether a username is held by any row other than `excluding`.
    pub async fn username_taken(
        &self,
        username: &str,
        excluding: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Registration::find()
            .filter(entity::registration::Column::Username.eq(username));
        if let Some(user_id) = excluding {
            query = query.filter(entity::registration::Column::UserId.ne(user_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether an email is held by any row other than `excluding`.
    pub async fn email_taken(&self, email: &str, excluding: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Registration::find()
            .filter(entity::registration::Column::Email.eq(email));
        if let Some(user_id) = excluding {
            query = query.filter(entity::registration::Column::UserId.ne(user_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Inserts a pending registration holding a freshly issued OTP.
    pub async fn create_pending(&self, param: IssueOtpParam) -> Result<Registration, DbErr> {
        let entity = entity::registration::ActiveModel {
            email: ActiveValue::Set(param.email),
            is_active: ActiveValue::Set(false),
            otp: ActiveValue::Set(Some(param.otp)),
            otp_expiry: ActiveValue::Set(Some(param.otp_expiry)),
            otp_verified: ActiveValue::Set(false),
            retry_attempts: ActiveValue::Set(param.retry_attempts),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Registration::from_entity(entity))
    }

    /// Replaces the OTP on an existing pending registration and resets verification.
    pub async fn reissue_otp(&self, user_id: i32, param: IssueOtpParam) -> Result<(), DbErr> {
        entity::prelude::Registration::update_many()
            .filter(entity::registration::Column::UserId.eq(user_id))
            .col_expr(entity::registration::Column::Otp, Expr::value(param.otp))
            .col_expr(
                entity::registration::Column::OtpExpiry,
                Expr::value(param.otp_expiry),
            )
            .col_expr(entity::registration::Column::OtpVerified, Expr::value(false))
            .col_expr(
                entity::registration::Column::RetryAttempts,
                Expr::value(param.retry_attempts),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn mark_otp_verified(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::Registration::update_many()
            .filter(entity::registration::Column::UserId.eq(user_id))
            .col_expr(entity::registration::Column::OtpVerified, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Writes the profile fields onto a pending registration and activates it.
    ///
    /// OTP state is cleared so the code cannot be reused.
    pub async fn complete_registration(
        &self,
        param: CompleteRegistrationParam,
    ) -> Result<User, AppError> {
        let entity = entity::registration::ActiveModel {
            user_id: ActiveValue::Unchanged(param.user_id),
            username: ActiveValue::Set(Some(param.username)),
            password: ActiveValue::Set(Some(param.password_hash)),
            phone_number: ActiveValue::Set(Some(param.phone_number)),
            country: ActiveValue::Set(Some(param.country)),
            dob: ActiveValue::Set(Some(param.dob)),
            is_active: ActiveValue::Set(true),
            otp: ActiveValue::Set(None),
            otp_expiry: ActiveValue::Set(None),
            otp_verified: ActiveValue::Set(false),
            retry_attempts: ActiveValue::Set(0),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Applies a partial update. Only `Some` fields are written.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::DbErr(RecordNotFound))` - No row with that id
    pub async fn update(&self, user_id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        let mut active = entity::registration::ActiveModel {
            user_id: ActiveValue::Unchanged(user_id),
            ..Default::default()
        };

        if let Some(username) = param.username {
            active.username = ActiveValue::Set(Some(username));
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = param.password_hash {
            active.password = ActiveValue::Set(Some(password_hash));
        }
        if let Some(phone_number) = param.phone_number {
            active.phone_number = ActiveValue::Set(Some(phone_number));
        }
        if let Some(country) = param.country {
            active.country = ActiveValue::Set(Some(country));
        }
        if let Some(dob) = param.dob {
            active.dob = ActiveValue::Set(Some(dob));
        }

        if !active.is_changed() {
            let entity = entity::prelude::Registration::find_by_id(user_id)
                .one(self.db)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound(format!("registration {}", user_id)))?;
            return User::from_entity(entity);
        }

        let entity = active.update(self.db).await?;

        User::from_entity(entity)
    }

    /// Gets active accounts one page at a time, ordered by id.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users on the page and the total number of active users
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_active_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let paginator = entity::prelude::Registration::find()
            .filter(entity::registration::Column::IsActive.eq(true))
            .order_by_asc(entity::registration::Column::UserId)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        if !page_has_rows(page, per_page, total) {
            return Ok((Vec::new(), total));
        }
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Returns active usernames containing `fragment`, ignoring case.
    pub async fn search_usernames(&self, fragment: &str) -> Result<Vec<String>, DbErr> {
        let pattern = format!("%{}%", fragment.to_lowercase());

        let usernames: Vec<Option<String>> = entity::prelude::Registration::find()
            .select_only()
            .column(entity::registration::Column::Username)
            .filter(entity::registration::Column::IsActive.eq(true))
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::registration::Column::Username)))
                    .like(pattern),
            )
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(usernames.into_iter().flatten().collect())
    }

    /// Maps user ids to usernames for active accounts among `user_ids`.
    pub async fn usernames_for(&self, user_ids: Vec<i32>) -> Result<Vec<(i32, String)>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<(i32, Option<String>)> = entity::prelude::Registration::find()
            .select_only()
            .column(entity::registration::Column::UserId)
            .column(entity::registration::Column::Username)
            .filter(entity::registration::Column::UserId.is_in(user_ids))
            .filter(entity::registration::Column::IsActive.eq(true))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(id, username)| username.map(|u| (id, u)))
            .collect())
    }

    /// Returns the emails of the given accounts.
    pub async fn emails_for(&self, user_ids: Vec<i32>) -> Result<Vec<String>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Registration::find()
            .select_only()
            .column(entity::registration::Column::Email)
            .filter(entity::registration::Column::UserId.is_in(user_ids))
            .filter(entity::registration::Column::IsActive.eq(true))
            .order_by_asc(entity::registration::Column::UserId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Deletes a single row by id.
    pub async fn delete(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::Registration::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes pending registrations whose OTP expired before `cutoff`.
    ///
    /// Active accounts are never touched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    pub async fn delete_stale_pending(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Registration::delete_many()
            .filter(entity::registration::Column::IsActive.eq(false))
            .filter(entity::registration::Column::OtpExpiry.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
