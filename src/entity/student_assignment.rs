use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One student's work on one assignment.
///
/// `submitted IS NULL` means not yet submitted; `grade IS NOT NULL` means
/// graded. The grading fields are the only columns in the schema mutated
/// after insertion.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student_assignment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub student_id: i32,
    #[sea_orm(belongs_to, from = "student_id", to = "id")]
    pub student: HasOne<super::student::Entity>,

    pub assignment_id: i32,
    #[sea_orm(belongs_to, from = "assignment_id", to = "id")]
    pub assignment: HasOne<super::assignment::Entity>,

    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub grade: Option<Decimal>,
    pub submitted: Option<DateTimeUtc>,
    pub reviewed: Option<DateTimeUtc>,

    /// Reviewing faculty member. Non-cascading: reviews block faculty
    /// deletion.
    pub reviewer_id: Option<i32>,
    #[sea_orm(belongs_to, from = "reviewer_id", to = "id")]
    pub reviewer: HasOne<super::faculty::Entity>,

    pub feedback: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
