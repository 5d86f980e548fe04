use sea_orm::*;

use crate::entity::{assignment, course, student, student_assignment};
use crate::error::SchemaError;

impl student::Model {
    /// Distinct courses taught in the student's program.
    pub async fn courses<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<course::Model>, SchemaError> {
        let course_ids: Vec<i32> = assignment::Entity::find()
            .filter(assignment::Column::ProgramId.eq(self.program_id))
            .select_only()
            .column(assignment::Column::CourseId)
            .into_tuple()
            .all(db)
            .await?;

        Ok(course::Entity::find()
            .filter(course::Column::Id.is_in(course_ids))
            .order_by_asc(course::Column::Id)
            .all(db)
            .await?)
    }

    /// All assignments handed out in the student's program.
    pub async fn assignments<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<assignment::Model>, SchemaError> {
        Ok(assignment::Entity::find()
            .filter(assignment::Column::ProgramId.eq(self.program_id))
            .order_by_asc(assignment::Column::Id)
            .all(db)
            .await?)
    }

    /// The student's submissions that have been handed in, optionally
    /// narrowed to one assignment.
    pub async fn assignments_submitted<C: ConnectionTrait>(
        &self,
        db: &C,
        assignment_id: Option<i32>,
    ) -> Result<Vec<student_assignment::Model>, SchemaError> {
        self.submission_rows(db, assignment_id, |s| {
            s.filter(student_assignment::Column::Submitted.is_not_null())
        })
        .await
    }

    /// The student's submissions not yet handed in, optionally narrowed to
    /// one assignment. Together with [`Self::assignments_submitted`] this
    /// partitions the student's submission rows.
    pub async fn assignments_not_submitted<C: ConnectionTrait>(
        &self,
        db: &C,
        assignment_id: Option<i32>,
    ) -> Result<Vec<student_assignment::Model>, SchemaError> {
        self.submission_rows(db, assignment_id, |s| {
            s.filter(student_assignment::Column::Submitted.is_null())
        })
        .await
    }

    /// The student's submissions that have been handed in and graded,
    /// optionally narrowed to one assignment.
    pub async fn assignments_graded<C: ConnectionTrait>(
        &self,
        db: &C,
        assignment_id: Option<i32>,
    ) -> Result<Vec<student_assignment::Model>, SchemaError> {
        self.submission_rows(db, assignment_id, |s| {
            s.filter(student_assignment::Column::Submitted.is_not_null())
                .filter(student_assignment::Column::Grade.is_not_null())
        })
        .await
    }

    async fn submission_rows<C, F>(
        &self,
        db: &C,
        assignment_id: Option<i32>,
        refine: F,
    ) -> Result<Vec<student_assignment::Model>, SchemaError>
    where
        C: ConnectionTrait,
        F: FnOnce(Select<student_assignment::Entity>) -> Select<student_assignment::Entity>,
    {
        let mut select = student_assignment::Entity::find()
            .filter(student_assignment::Column::StudentId.eq(self.id));
        if let Some(aid) = assignment_id {
            select = select.filter(student_assignment::Column::AssignmentId.eq(aid));
        }

        Ok(refine(select)
            .order_by_asc(student_assignment::Column::Id)
            .all(db)
            .await?)
    }
}
