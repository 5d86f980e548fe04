use sea_orm::*;

use crate::entity::{assignment, content, course, program, student, student_assignment};
use crate::error::SchemaError;

impl course::Model {
    /// Distinct programs this course is assigned in. The course-program
    /// association is transitive through assignments.
    pub async fn programs<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<program::Model>, SchemaError> {
        let program_ids: Vec<i32> = assignment::Entity::find()
            .filter(assignment::Column::CourseId.eq(self.id))
            .select_only()
            .column(assignment::Column::ProgramId)
            .into_tuple()
            .all(db)
            .await?;

        Ok(program::Entity::find()
            .filter(program::Column::Id.is_in(program_ids))
            .order_by_asc(program::Column::Id)
            .all(db)
            .await?)
    }

    /// Distinct students with a submission row for any of this course's
    /// assignments.
    pub async fn students<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<student::Model>, SchemaError> {
        let assignment_ids = self.assignment_ids(db).await?;
        if assignment_ids.is_empty() {
            return Ok(vec![]);
        }

        let student_ids: Vec<i32> = student_assignment::Entity::find()
            .filter(student_assignment::Column::AssignmentId.is_in(assignment_ids))
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

    /// Distinct content repositories this course's assignments draw on.
    pub async fn content<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<content::Model>, SchemaError> {
        let content_ids: Vec<i32> = assignment::Entity::find()
            .filter(assignment::Column::CourseId.eq(self.id))
            .select_only()
            .column(assignment::Column::ContentId)
            .into_tuple()
            .all(db)
            .await?;

        Ok(content::Entity::find()
            .filter(content::Column::Id.is_in(content_ids))
            .order_by_asc(content::Column::Id)
            .all(db)
            .await?)
    }

    /// This course's assignments.
    pub async fn assignments<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<assignment::Model>, SchemaError> {
        Ok(assignment::Entity::find()
            .filter(assignment::Column::CourseId.eq(self.id))
            .order_by_asc(assignment::Column::Id)
            .all(db)
            .await?)
    }

    async fn assignment_ids<C: ConnectionTrait>(&self, db: &C) -> Result<Vec<i32>, SchemaError> {
        Ok(assignment::Entity::find()
            .filter(assignment::Column::CourseId.eq(self.id))
            .select_only()
            .column(assignment::Column::Id)
            .into_tuple()
            .all(db)
            .await?)
    }
}
