use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_registration_table::Registration;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Follows::Table)
                    .if_not_exists()
                    .col(pk_auto(Follows::Id))
                    .col(integer(Follows::FollowerId))
                    .col(integer(Follows::FollowingId))
                    .col(
                        timestamp_with_time_zone(Follows::FollowedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follows_follower_id")
                            .from(Follows::Table, Follows::FollowerId)
                            .to(Registration::Table, Registration::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follows_following_id")
                            .from(Follows::Table, Follows::FollowingId)
                            .to(Registration::Table, Registration::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("unique_follow")
                    .table(Follows::Table)
                    .col(Follows::FollowerId)
                    .col(Follows::FollowingId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Follows::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Follows {
    Table,
    Id,
    FollowerId,
    FollowingId,
    FollowedAt,
}
