//! Randomized development-data seeding.
//!
//! Lives outside the entity definitions: seeding is a tooling concern, not
//! part of the schema contract. Every step is idempotent — rows are only
//! created when the table is still empty, and duplicate random assignment
//! triples are skipped.

use chrono::{Duration, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use rust_decimal::Decimal;
use sea_orm::*;
use tracing::info;

use crate::entity::{
    assignment, content, course, faculty, program, student, student_assignment,
};
use crate::error::SchemaError;
use crate::ops;

const FACULTY_COUNT: i32 = 5;
const PROGRAM_COUNT: i32 = 3;
const COURSE_COUNT: i32 = 3;
const CONTENT_COUNT: i32 = 28;
const STUDENT_COUNT: i32 = 10;
const ASSIGNMENT_ATTEMPTS: i32 = 5;
const STUDENT_ASSIGNMENT_COUNT: i32 = 10;

pub async fn seed_faculty(db: &DatabaseConnection) -> Result<Vec<faculty::Model>, SchemaError> {
    let existing = faculty::Entity::find().all(db).await?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    for i in 1..=FACULTY_COUNT {
        let (github, is_active) = {
            let mut rng = rand::rng();
            // Handle ranges are disjoint from the student ones so the two
            // unique columns cannot collide within a run.
            (
                format!("github_{}_{i}", rng.random_range(1000..5000)),
                rng.random_bool(0.5),
            )
        };
        ops::create_faculty(db, 9000 + i, &github, is_active).await?;
    }

    let rows = faculty::Entity::find().all(db).await?;
    info!("Seeded {} faculty members", rows.len());
    Ok(rows)
}

pub async fn seed_programs(db: &DatabaseConnection) -> Result<Vec<program::Model>, SchemaError> {
    let existing = program::Entity::find().all(db).await?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    let now = Utc::now();
    for i in 1..=PROGRAM_COUNT {
        let (behind, ahead) = {
            let mut rng = rand::rng();
            (rng.random_range(30..=365), rng.random_range(30..=365))
        };
        ops::create_program(
            db,
            &format!("Program_{i}"),
            now - Duration::days(behind),
            now + Duration::days(ahead),
        )
        .await?;
    }

    let rows = program::Entity::find().all(db).await?;
    info!("Seeded {} programs", rows.len());
    Ok(rows)
}

pub async fn seed_courses(db: &DatabaseConnection) -> Result<Vec<course::Model>, SchemaError> {
    let existing = course::Entity::find().all(db).await?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    for i in 1..=COURSE_COUNT {
        ops::create_course(db, &format!("Course_{i}")).await?;
    }

    let rows = course::Entity::find().all(db).await?;
    info!("Seeded {} courses", rows.len());
    Ok(rows)
}

pub async fn seed_content(
    db: &DatabaseConnection,
    faculties: &[faculty::Model],
) -> Result<Vec<content::Model>, SchemaError> {
    let existing = content::Entity::find().all(db).await?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    for i in 1..=CONTENT_COUNT {
        let owner = {
            let mut rng = rand::rng();
            faculties
                .choose(&mut rng)
                .ok_or_else(|| SchemaError::Validation("no faculty to own content".into()))?
                .clone()
        };
        let repo = format!("https://github.com/{}/repo_{i}", owner.github);
        ops::create_content(db, &format!("Content_{i}"), owner.id, &repo).await?;
    }

    let rows = content::Entity::find().all(db).await?;
    info!("Seeded {} content rows", rows.len());
    Ok(rows)
}

pub async fn seed_students(
    db: &DatabaseConnection,
    programs: &[program::Model],
) -> Result<Vec<student::Model>, SchemaError> {
    let existing = student::Entity::find().all(db).await?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    for i in 1..=STUDENT_COUNT {
        let (github, is_active, program_id) = {
            let mut rng = rand::rng();
            let program = programs
                .choose(&mut rng)
                .ok_or_else(|| SchemaError::Validation("no program to enrol into".into()))?;
            (
                format!("github_{}_{i}", rng.random_range(5000..10000)),
                rng.random_bool(0.5),
                program.id,
            )
        };
        ops::create_student(db, 1000 + i, &github, is_active, program_id).await?;
    }

    let rows = student::Entity::find().all(db).await?;
    info!("Seeded {} students", rows.len());
    Ok(rows)
}

pub async fn seed_assignments(
    db: &DatabaseConnection,
    programs: &[program::Model],
    courses: &[course::Model],
    contents: &[content::Model],
) -> Result<Vec<assignment::Model>, SchemaError> {
    let existing = assignment::Entity::find().all(db).await?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    let now = Utc::now();
    let mut created = 0u32;
    for _ in 0..ASSIGNMENT_ATTEMPTS {
        let (program_id, course_id, content_id, due_in, tag) = {
            let mut rng = rand::rng();
            match (
                programs.choose(&mut rng),
                courses.choose(&mut rng),
                contents.choose(&mut rng),
            ) {
                (Some(p), Some(c), Some(ct)) => (
                    p.id,
                    c.id,
                    ct.id,
                    rng.random_range(7..=30),
                    rng.random_range(100..1000),
                ),
                _ => return Err(SchemaError::Validation("nothing to assign".into())),
            }
        };

        let result = ops::create_assignment(
            db,
            program_id,
            course_id,
            content_id,
            now + Duration::days(due_in),
            &format!("Instructions for Assignment_{tag}"),
            &format!("Rubric for Assignment_{tag}"),
        )
        .await;

        match result {
            Ok(_) => created += 1,
            // Random triple already taken; the unique triple stands.
            Err(SchemaError::ConstraintViolation(_)) => {}
            Err(e) => return Err(e),
        }
    }

    let rows = assignment::Entity::find().all(db).await?;
    info!("Seeded {} new assignments", created);
    Ok(rows)
}

pub async fn seed_student_assignments(
    db: &DatabaseConnection,
    students: &[student::Model],
    assignments: &[assignment::Model],
    faculties: &[faculty::Model],
) -> Result<Vec<student_assignment::Model>, SchemaError> {
    let existing = student_assignment::Entity::find().all(db).await?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    let now = Utc::now();
    for _ in 0..STUDENT_ASSIGNMENT_COUNT {
        let (student_id, assignment_id, reviewer_id, submitted_ago, review_lag, grade) = {
            let mut rng = rand::rng();
            let (Some(s), Some(a), Some(f)) = (
                students.choose(&mut rng),
                assignments.choose(&mut rng),
                faculties.choose(&mut rng),
            ) else {
                return Err(SchemaError::Validation("nothing to submit against".into()));
            };
            let grade = if rng.random_bool(0.5) {
                Some(Decimal::new(rng.random_range(6000..=10000), 2))
            } else {
                None
            };
            (
                s.id,
                a.id,
                f.id,
                rng.random_range(0..=7),
                rng.random_range(0..=7),
                grade,
            )
        };

        let submitted = now - Duration::days(submitted_ago);
        let reviewed = submitted + Duration::days(review_lag);
        student_assignment::ActiveModel {
            student_id: Set(student_id),
            assignment_id: Set(assignment_id),
            grade: Set(grade),
            submitted: Set(Some(submitted)),
            reviewed: Set(Some(reviewed)),
            reviewer_id: Set(Some(reviewer_id)),
            feedback: Set(Some(format!("Feedback for assignment {assignment_id}"))),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(SchemaError::from_write)?;
    }

    let rows = student_assignment::Entity::find().all(db).await?;
    info!("Seeded {} student assignments", rows.len());
    Ok(rows)
}

/// Populate an empty development database with the full random data set.
pub async fn seed_all(db: &DatabaseConnection) -> Result<(), SchemaError> {
    let faculties = seed_faculty(db).await?;
    let programs = seed_programs(db).await?;
    let courses = seed_courses(db).await?;
    let contents = seed_content(db, &faculties).await?;
    let students = seed_students(db, &programs).await?;
    let assignments = seed_assignments(db, &programs, &courses, &contents).await?;
    seed_student_assignments(db, &students, &assignments, &faculties).await?;

    info!("Development seed data in place");
    Ok(())
}
