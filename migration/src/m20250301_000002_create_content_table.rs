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
                    .table(Content::Table)
                    .if_not_exists()
                    .col(pk_auto(Content::CId))
                    .col(integer(Content::UserId))
                    .col(string(Content::Username))
                    .col(string(Content::Title))
                    .col(text(Content::Caption))
                    .col(string(Content::File))
                    .col(
                        timestamp_with_time_zone(Content::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_user_id")
                            .from(Content::Table, Content::UserId)
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
                    .name("idx_content_username")
                    .table(Content::Table)
                    .col(Content::Username)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Content::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Content {
    Table,
    CId,
    UserId,
    Username,
    Title,
    Caption,
    File,
    CreatedAt,
}
