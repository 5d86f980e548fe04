use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An assignment handed to the students of a program: one course, one
/// content repository, a due date.
///
/// The (program_id, course_id, content_id) triple is unique; the composite
/// index backing it is created by `database::ensure_indexes`.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub program_id: i32,
    #[sea_orm(belongs_to, from = "program_id", to = "id")]
    pub program: HasOne<super::program::Entity>,

    pub course_id: i32,
    #[sea_orm(belongs_to, from = "course_id", to = "id")]
    pub course: HasOne<super::course::Entity>,

    pub content_id: i32,
    #[sea_orm(belongs_to, from = "content_id", to = "id")]
    pub content: HasOne<super::content::Entity>,

    pub due: DateTimeUtc,
    pub instructions: String, // free text
    pub rubric: String,       // free text

    #[sea_orm(has_many)]
    pub student_assignments: HasMany<super::student_assignment::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
