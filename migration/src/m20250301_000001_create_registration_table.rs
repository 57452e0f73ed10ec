use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(pk_auto(Registration::UserId))
                    .col(string_null(Registration::Username).unique_key())
                    .col(string_null(Registration::Password))
                    .col(string_uniq(Registration::Email))
                    .col(date_null(Registration::Dob))
                    .col(string_null(Registration::PhoneNumber))
                    .col(string_null(Registration::Country))
                    .col(boolean(Registration::IsActive).default(false))
                    .col(integer_null(Registration::Otp))
                    .col(timestamp_with_time_zone_null(Registration::OtpExpiry))
                    .col(boolean(Registration::OtpVerified).default(false))
                    .col(integer(Registration::RetryAttempts).default(0))
                    .col(
                        timestamp_with_time_zone(Registration::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Registration {
    #[sea_orm(iden = "registrations")]
    Table,
    UserId,
    Username,
    Password,
    Email,
    Dob,
    PhoneNumber,
    Country,
    IsActive,
    Otp,
    OtpExpiry,
    OtpVerified,
    RetryAttempts,
    CreatedAt,
}
