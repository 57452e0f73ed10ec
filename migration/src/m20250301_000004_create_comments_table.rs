use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_registration_table::Registration,
    m20250301_000002_create_content_table::Content,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comment::Table)
                    .if_not_exists()
                    .col(pk_auto(Comment::CommentId))
                    .col(integer(Comment::UserId))
                    .col(integer(Comment::PostId))
                    .col(text(Comment::UserComment))
                    .col(
                        timestamp_with_time_zone(Comment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_user_id")
                            .from(Comment::Table, Comment::UserId)
                            .to(Registration::Table, Registration::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_post_id")
                            .from(Comment::Table, Comment::PostId)
                            .to(Content::Table, Content::CId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comment {
    #[sea_orm(iden = "comments")]
    Table,
    CommentId,
    UserId,
    PostId,
    UserComment,
    CreatedAt,
}
