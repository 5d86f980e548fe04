#![allow(dead_code)]

use chrono::{Duration, Utc};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use voyage_schema::database;
use voyage_schema::entity::{assignment, content, course, faculty, program, student};
use voyage_schema::ops;

/// Fresh in-memory SQLite database with the schema synced.
///
/// The pool is pinned to a single connection: every new SQLite `:memory:`
/// connection would otherwise see its own empty database.
pub async fn test_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to open in-memory SQLite");
    database::sync_schema(&db)
        .await
        .expect("Failed to sync schema");
    db
}

/// One row of everything, wired together: faculty F1 owns content Repo1,
/// assigned in course C1 to program P1, with student S1 enrolled.
pub struct Fixture {
    pub faculty: faculty::Model,
    pub program: program::Model,
    pub course: course::Model,
    pub content: content::Model,
    pub assignment: assignment::Model,
    pub student: student::Model,
}

pub async fn base_fixture(db: &DatabaseConnection) -> Fixture {
    let now = Utc::now();

    let faculty = ops::create_faculty(db, 9001, "f1", true)
        .await
        .expect("create faculty");
    let program = ops::create_program(db, "P1", now - Duration::days(30), now + Duration::days(90))
        .await
        .expect("create program");
    let course = ops::create_course(db, "C1").await.expect("create course");
    let content = ops::create_content(db, "Repo1", faculty.id, "https://github.com/f1/repo_1")
        .await
        .expect("create content");
    let assignment = ops::create_assignment(
        db,
        program.id,
        course.id,
        content.id,
        now + Duration::days(14),
        "Implement the exercise",
        "Correctness 70, style 30",
    )
    .await
    .expect("create assignment");
    let student = ops::create_student(db, 1001, "s1", true, program.id)
        .await
        .expect("create student");

    Fixture {
        faculty,
        program,
        course,
        content,
        assignment,
        student,
    }
}
