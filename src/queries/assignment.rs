use sea_orm::*;

use crate::entity::{assignment, student, student_assignment};
use crate::error::SchemaError;

impl assignment::Model {
    /// Distinct students with a submission row for this assignment.
    pub async fn students<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<student::Model>, SchemaError> {
        let student_ids: Vec<i32> = student_assignment::Entity::find()
            .filter(student_assignment::Column::AssignmentId.eq(self.id))
            .select_only()
            .column(student_assignment::Column::StudentId)
            .into_tuple()
            .all(db)
            .await?;

        Ok(student::Entity::find()
            .filter(student::Column::Id.is_in(student_ids))
            .order_by_asc(student::Column::Id)
            .all(db)
            .await?)
    }

    /// Submission rows for this assignment: all of them, graded-only
    /// (`Some(true)`), or ungraded-only (`Some(false)`).
    pub async fn submissions<C: ConnectionTrait>(
        &self,
        db: &C,
        graded: Option<bool>,
    ) -> Result<Vec<student_assignment::Model>, SchemaError> {
        let mut select = student_assignment::Entity::find()
            .filter(student_assignment::Column::AssignmentId.eq(self.id));

        match graded {
            Some(true) => {
                select = select.filter(student_assignment::Column::Grade.is_not_null());
            }
            Some(false) => {
                select = select.filter(student_assignment::Column::Grade.is_null());
            }
            None => {}
        }

        Ok(select
            .order_by_asc(student_assignment::Column::Id)
            .all(db)
            .await?)
    }
}
