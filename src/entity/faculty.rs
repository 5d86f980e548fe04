use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "faculty")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Reference into the external identity system. Accounts themselves are
    /// not managed by this schema.
    #[sea_orm(unique)]
    pub user_id: i32,

    /// Source-hosting username.
    #[sea_orm(unique)]
    pub github: String,
    pub is_active: bool,

    #[sea_orm(has_many)]
    pub content: HasMany<super::content::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
