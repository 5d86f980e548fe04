use sea_orm::*;

use crate::entity::{assignment, content, course, faculty, program, student, student_assignment};
use crate::error::SchemaError;

impl faculty::Model {
    /// Distinct programs of the students working on assignments built from
    /// this faculty member's content.
    pub async fn programs<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<program::Model>, SchemaError> {
        let assignment_ids = self.all_assignment_ids(db).await?;
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
        if student_ids.is_empty() {
            return Ok(vec![]);
        }

        let program_ids: Vec<i32> = student::Entity::find()
            .filter(student::Column::Id.is_in(student_ids))
            .select_only()
            .column(student::Column::ProgramId)
            .into_tuple()
            .all(db)
            .await?;

        Ok(program::Entity::find()
            .filter(program::Column::Id.is_in(program_ids))
            .order_by_asc(program::Column::Id)
            .all(db)
            .await?)
    }

    /// Distinct courses this faculty member's content is assigned in.
    pub async fn courses<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<course::Model>, SchemaError> {
        let assignment_ids = self.all_assignment_ids(db).await?;
        if assignment_ids.is_empty() {
            return Ok(vec![]);
        }

        let course_ids: Vec<i32> = assignment::Entity::find()
            .filter(assignment::Column::Id.is_in(assignment_ids))
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

    /// Assignments of the faculty member's *first* content row (lowest id),
    /// optionally narrowed by program and/or course. Only that one content
    /// row is consulted; the other content rows are ignored. Historical
    /// behavior, kept deliberately — see [`Self::assignments`] for the union
    /// across all content.
    pub async fn content<C: ConnectionTrait>(
        &self,
        db: &C,
        program_id: Option<i32>,
        course_id: Option<i32>,
    ) -> Result<Vec<assignment::Model>, SchemaError> {
        let first = content::Entity::find()
            .filter(content::Column::FacultyId.eq(self.id))
            .order_by_asc(content::Column::Id)
            .one(db)
            .await?;
        let Some(first) = first else {
            return Ok(vec![]);
        };

        let mut select =
            assignment::Entity::find().filter(assignment::Column::ContentId.eq(first.id));
        if let Some(pid) = program_id {
            select = select.filter(assignment::Column::ProgramId.eq(pid));
        }
        if let Some(cid) = course_id {
            select = select.filter(assignment::Column::CourseId.eq(cid));
        }

        Ok(select
            .order_by_asc(assignment::Column::Id)
            .all(db)
            .await?)
    }

    /// Assignments across *all* of the faculty member's content, optionally
    /// narrowed by program and/or course.
    pub async fn assignments<C: ConnectionTrait>(
        &self,
        db: &C,
        program_id: Option<i32>,
        course_id: Option<i32>,
    ) -> Result<Vec<assignment::Model>, SchemaError> {
        let content_ids = self.content_ids(db).await?;
        if content_ids.is_empty() {
            return Ok(vec![]);
        }

        let mut select =
            assignment::Entity::find().filter(assignment::Column::ContentId.is_in(content_ids));
        if let Some(pid) = program_id {
            select = select.filter(assignment::Column::ProgramId.eq(pid));
        }
        if let Some(cid) = course_id {
            select = select.filter(assignment::Column::CourseId.eq(cid));
        }

        Ok(select
            .order_by_asc(assignment::Column::Id)
            .all(db)
            .await?)
    }

    /// All submissions this faculty member reviews.
    pub async fn reviews<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<student_assignment::Model>, SchemaError> {
        Ok(student_assignment::Entity::find()
            .filter(student_assignment::Column::ReviewerId.eq(self.id))
            .order_by_asc(student_assignment::Column::Id)
            .all(db)
            .await?)
    }

    /// Submissions this faculty member reviewed that carry a grade,
    /// optionally narrowed to one assignment.
    pub async fn assignments_graded<C: ConnectionTrait>(
        &self,
        db: &C,
        assignment_id: Option<i32>,
    ) -> Result<Vec<student_assignment::Model>, SchemaError> {
        let mut select = student_assignment::Entity::find()
            .filter(student_assignment::Column::ReviewerId.eq(self.id))
            .filter(student_assignment::Column::Grade.is_not_null());
        if let Some(aid) = assignment_id {
            select = select.filter(student_assignment::Column::AssignmentId.eq(aid));
        }

        Ok(select
            .order_by_asc(student_assignment::Column::Id)
            .all(db)
            .await?)
    }

    async fn content_ids<C: ConnectionTrait>(&self, db: &C) -> Result<Vec<i32>, SchemaError> {
        Ok(content::Entity::find()
            .filter(content::Column::FacultyId.eq(self.id))
            .select_only()
            .column(content::Column::Id)
            .into_tuple()
            .all(db)
            .await?)
    }

    async fn all_assignment_ids<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<i32>, SchemaError> {
        let content_ids = self.content_ids(db).await?;
        if content_ids.is_empty() {
            return Ok(vec![]);
        }

        Ok(assignment::Entity::find()
            .filter(assignment::Column::ContentId.is_in(content_ids))
            .select_only()
            .column(assignment::Column::Id)
            .into_tuple()
            .all(db)
            .await?)
    }
}
