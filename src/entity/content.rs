use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub name: String,

    /// Owning faculty member. Non-cascading: content blocks faculty deletion.
    pub faculty_id: i32,
    #[sea_orm(belongs_to, from = "faculty_id", to = "id")]
    pub faculty: HasOne<super::faculty::Entity>,

    /// Repository URL.
    #[sea_orm(unique)]
    pub repo: String,

    #[sea_orm(has_many)]
    pub assignments: HasMany<super::assignment::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
