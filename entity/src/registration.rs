use sea_orm::entity::prelude::*;

/// A user account row.
///
/// Rows are created as pending registrations when an OTP is first requested and
/// become active accounts once registration completes. `username` and `password`
/// stay empty until then.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "registrations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    #[sea_orm(unique)]
    pub username: Option<String>,
    pub password: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub dob: Option<Date>,
    pub phone_number: Option<String>,
    pub country: Option<String>,
    pub is_active: bool,
    pub otp: Option<i32>,
    pub otp_expiry: Option<DateTimeUtc>,
    pub otp_verified: bool,
    pub retry_attempts: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::content::Entity")]
    Content,
    #[sea_orm(has_many = "super::likes::Entity")]
    Likes,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Content.def()
    }
}

impl Related<super::likes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
