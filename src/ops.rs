//! Write operations of the schema: insertion with constraint mapping,
//! deletion with the documented cascade rules, and the grading workflow's
//! update surface.
//!
//! Non-cascading references enforce strict referential integrity: a delete
//! blocked by a dependent row fails with
//! [`SchemaError::ConstraintViolation`] instead of leaving a dangling
//! reference. Multi-statement deletes run inside a transaction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::*;
use tracing::info;

use crate::entity::{
    assignment, content, course, faculty, program, student, student_assignment,
};
use crate::error::SchemaError;

/// Find a faculty member by id or fail with NotFound.
pub async fn find_faculty<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<faculty::Model, SchemaError> {
    faculty::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| SchemaError::NotFound(format!("faculty {id}")))
}

/// Find a program by id or fail with NotFound.
pub async fn find_program<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<program::Model, SchemaError> {
    program::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| SchemaError::NotFound(format!("program {id}")))
}

/// Find a course by id or fail with NotFound.
pub async fn find_course<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<course::Model, SchemaError> {
    course::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| SchemaError::NotFound(format!("course {id}")))
}

/// Find a content row by id or fail with NotFound.
pub async fn find_content<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<content::Model, SchemaError> {
    content::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| SchemaError::NotFound(format!("content {id}")))
}

/// Find a student by id or fail with NotFound.
pub async fn find_student<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<student::Model, SchemaError> {
    student::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| SchemaError::NotFound(format!("student {id}")))
}

/// Find an assignment by id or fail with NotFound.
pub async fn find_assignment<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<assignment::Model, SchemaError> {
    assignment::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| SchemaError::NotFound(format!("assignment {id}")))
}

/// Find a student-assignment row by id or fail with NotFound.
pub async fn find_student_assignment<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<student_assignment::Model, SchemaError> {
    student_assignment::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| SchemaError::NotFound(format!("student assignment {id}")))
}

fn require_field(value: &str, field: &str) -> Result<String, SchemaError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SchemaError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

pub async fn create_faculty<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    github: &str,
    is_active: bool,
) -> Result<faculty::Model, SchemaError> {
    let github = require_field(github, "github handle")?;

    let now = Utc::now();
    faculty::ActiveModel {
        user_id: Set(user_id),
        github: Set(github),
        is_active: Set(is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(SchemaError::from_write)
}

pub async fn create_program<C: ConnectionTrait>(
    db: &C,
    name: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<program::Model, SchemaError> {
    let name = require_field(name, "program name")?;

    let now = Utc::now();
    program::ActiveModel {
        name: Set(name),
        start: Set(start),
        end: Set(end),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(SchemaError::from_write)
}

pub async fn create_course<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<course::Model, SchemaError> {
    let name = require_field(name, "course name")?;

    let now = Utc::now();
    course::ActiveModel {
        name: Set(name),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(SchemaError::from_write)
}

pub async fn create_content<C: ConnectionTrait>(
    db: &C,
    name: &str,
    faculty_id: i32,
    repo: &str,
) -> Result<content::Model, SchemaError> {
    let name = require_field(name, "content name")?;
    let repo = require_field(repo, "repository URL")?;
    let _ = find_faculty(db, faculty_id).await?;

    let now = Utc::now();
    content::ActiveModel {
        name: Set(name),
        faculty_id: Set(faculty_id),
        repo: Set(repo),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(SchemaError::from_write)
}

pub async fn create_student<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    github: &str,
    is_active: bool,
    program_id: i32,
) -> Result<student::Model, SchemaError> {
    let github = require_field(github, "github handle")?;
    let _ = find_program(db, program_id).await?;

    let now = Utc::now();
    student::ActiveModel {
        user_id: Set(user_id),
        github: Set(github),
        is_active: Set(is_active),
        program_id: Set(program_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(SchemaError::from_write)
}

/// Create an assignment. The (program, course, content) triple must be
/// unique; a duplicate fails with ConstraintViolation before the composite
/// unique index would reject it.
pub async fn create_assignment<C: ConnectionTrait>(
    db: &C,
    program_id: i32,
    course_id: i32,
    content_id: i32,
    due: DateTime<Utc>,
    instructions: &str,
    rubric: &str,
) -> Result<assignment::Model, SchemaError> {
    let _ = find_program(db, program_id).await?;
    let _ = find_course(db, course_id).await?;
    let _ = find_content(db, content_id).await?;

    let duplicate = assignment::Entity::find()
        .filter(assignment::Column::ProgramId.eq(program_id))
        .filter(assignment::Column::CourseId.eq(course_id))
        .filter(assignment::Column::ContentId.eq(content_id))
        .one(db)
        .await?;
    if duplicate.is_some() {
        return Err(SchemaError::ConstraintViolation(format!(
            "assignment for (program {program_id}, course {course_id}, content {content_id}) already exists"
        )));
    }

    let now = Utc::now();
    assignment::ActiveModel {
        program_id: Set(program_id),
        course_id: Set(course_id),
        content_id: Set(content_id),
        due: Set(due),
        instructions: Set(instructions.to_string()),
        rubric: Set(rubric.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(SchemaError::from_write)
}

/// Create a submission row for a student and an assignment. The grading
/// fields start out null.
pub async fn create_student_assignment<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    assignment_id: i32,
) -> Result<student_assignment::Model, SchemaError> {
    let _ = find_student(db, student_id).await?;
    let _ = find_assignment(db, assignment_id).await?;

    let now = Utc::now();
    student_assignment::ActiveModel {
        student_id: Set(student_id),
        assignment_id: Set(assignment_id),
        grade: Set(None),
        submitted: Set(None),
        reviewed: Set(None),
        reviewer_id: Set(None),
        feedback: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(SchemaError::from_write)
}

/// Mark a submission as handed in.
pub async fn submit_assignment(
    db: &DatabaseConnection,
    student_assignment_id: i32,
    at: DateTime<Utc>,
) -> Result<student_assignment::Model, SchemaError> {
    let row = find_student_assignment(db, student_assignment_id).await?;

    let mut active: student_assignment::ActiveModel = row.into();
    active.submitted = Set(Some(at));
    active.updated_at = Set(Utc::now());

    Ok(active.update(db).await?)
}

/// Record a grade and review for a handed-in submission.
pub async fn grade_submission(
    db: &DatabaseConnection,
    student_assignment_id: i32,
    grade: Decimal,
    reviewer_id: i32,
    feedback: Option<String>,
) -> Result<student_assignment::Model, SchemaError> {
    let row = find_student_assignment(db, student_assignment_id).await?;
    if row.submitted.is_none() {
        return Err(SchemaError::Validation(format!(
            "student assignment {student_assignment_id} has not been submitted"
        )));
    }
    let _ = find_faculty(db, reviewer_id).await?;

    let mut active: student_assignment::ActiveModel = row.into();
    active.grade = Set(Some(grade));
    active.reviewed = Set(Some(Utc::now()));
    active.reviewer_id = Set(Some(reviewer_id));
    active.feedback = Set(feedback);
    active.updated_at = Set(Utc::now());

    Ok(active.update(db).await?)
}

/// Delete an assignment and, cascading, its submission rows.
pub async fn delete_assignment(db: &DatabaseConnection, id: i32) -> Result<(), SchemaError> {
    let txn = db.begin().await?;

    let row = find_assignment(&txn, id).await?;
    let removed = student_assignment::Entity::delete_many()
        .filter(student_assignment::Column::AssignmentId.eq(row.id))
        .exec(&txn)
        .await?;
    assignment::Entity::delete_by_id(row.id).exec(&txn).await?;

    txn.commit().await?;
    info!(
        assignment_id = id,
        submissions = removed.rows_affected,
        "Deleted assignment"
    );
    Ok(())
}

/// Delete a program and, cascading, its assignments and their submission
/// rows. Enrolled students block the deletion.
pub async fn delete_program(db: &DatabaseConnection, id: i32) -> Result<(), SchemaError> {
    let txn = db.begin().await?;

    let row = find_program(&txn, id).await?;
    let students = student::Entity::find()
        .filter(student::Column::ProgramId.eq(row.id))
        .count(&txn)
        .await?;
    if students > 0 {
        return Err(SchemaError::ConstraintViolation(format!(
            "program {id} is referenced by {students} student(s)"
        )));
    }

    delete_assignments_of(&txn, assignment::Column::ProgramId, row.id).await?;
    program::Entity::delete_by_id(row.id).exec(&txn).await?;

    txn.commit().await?;
    info!(program_id = id, "Deleted program");
    Ok(())
}

/// Delete a course and, cascading, its assignments and their submission
/// rows.
pub async fn delete_course(db: &DatabaseConnection, id: i32) -> Result<(), SchemaError> {
    let txn = db.begin().await?;

    let row = find_course(&txn, id).await?;
    delete_assignments_of(&txn, assignment::Column::CourseId, row.id).await?;
    course::Entity::delete_by_id(row.id).exec(&txn).await?;

    txn.commit().await?;
    info!(course_id = id, "Deleted course");
    Ok(())
}

/// Delete a content row. Assignments referencing it block the deletion.
pub async fn delete_content(db: &DatabaseConnection, id: i32) -> Result<(), SchemaError> {
    let row = find_content(db, id).await?;
    let references = assignment::Entity::find()
        .filter(assignment::Column::ContentId.eq(row.id))
        .count(db)
        .await?;
    if references > 0 {
        return Err(SchemaError::ConstraintViolation(format!(
            "content {id} is referenced by {references} assignment(s)"
        )));
    }

    content::Entity::delete_by_id(row.id).exec(db).await?;
    info!(content_id = id, "Deleted content");
    Ok(())
}

/// Delete a student and, cascading, their submission rows.
pub async fn delete_student(db: &DatabaseConnection, id: i32) -> Result<(), SchemaError> {
    let txn = db.begin().await?;

    let row = find_student(&txn, id).await?;
    student_assignment::Entity::delete_many()
        .filter(student_assignment::Column::StudentId.eq(row.id))
        .exec(&txn)
        .await?;
    student::Entity::delete_by_id(row.id).exec(&txn).await?;

    txn.commit().await?;
    info!(student_id = id, "Deleted student");
    Ok(())
}

/// Delete a faculty member. Owned content and reviewed submissions block
/// the deletion.
pub async fn delete_faculty(db: &DatabaseConnection, id: i32) -> Result<(), SchemaError> {
    let row = find_faculty(db, id).await?;

    let content_refs = content::Entity::find()
        .filter(content::Column::FacultyId.eq(row.id))
        .count(db)
        .await?;
    if content_refs > 0 {
        return Err(SchemaError::ConstraintViolation(format!(
            "faculty {id} is referenced by {content_refs} content row(s)"
        )));
    }

    let review_refs = student_assignment::Entity::find()
        .filter(student_assignment::Column::ReviewerId.eq(row.id))
        .count(db)
        .await?;
    if review_refs > 0 {
        return Err(SchemaError::ConstraintViolation(format!(
            "faculty {id} is referenced by {review_refs} review(s)"
        )));
    }

    faculty::Entity::delete_by_id(row.id).exec(db).await?;
    info!(faculty_id = id, "Deleted faculty");
    Ok(())
}

/// Delete all assignments matching a parent column, submission rows first.
async fn delete_assignments_of(
    txn: &DatabaseTransaction,
    parent: assignment::Column,
    parent_id: i32,
) -> Result<(), SchemaError> {
    let assignment_ids: Vec<i32> = assignment::Entity::find()
        .filter(parent.eq(parent_id))
        .select_only()
        .column(assignment::Column::Id)
        .into_tuple()
        .all(txn)
        .await?;
    if assignment_ids.is_empty() {
        return Ok(());
    }

    student_assignment::Entity::delete_many()
        .filter(student_assignment::Column::AssignmentId.is_in(assignment_ids.clone()))
        .exec(txn)
        .await?;
    assignment::Entity::delete_many()
        .filter(assignment::Column::Id.is_in(assignment_ids))
        .exec(txn)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;

    #[tokio::test]
    async fn missing_faculty_maps_to_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<faculty::Model>::new()])
            .into_connection();

        let err = find_faculty(&db, 42).await.unwrap_err();
        assert!(matches!(err, SchemaError::NotFound(_)));
        assert_eq!(err.to_string(), "faculty 42 not found");
    }

    #[tokio::test]
    async fn empty_github_handle_is_rejected_before_touching_the_store() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = create_faculty(&db, 1, "   ", true).await.unwrap_err();
        assert!(matches!(err, SchemaError::Validation(_)));
    }
}
