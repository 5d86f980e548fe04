mod common;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};

use common::{base_fixture, test_db};
use voyage_schema::entity::{assignment, student_assignment};
use voyage_schema::error::SchemaError;
use voyage_schema::ops;

#[tokio::test]
async fn duplicate_unique_columns_fail_with_constraint_violation() {
    let db = test_db().await;
    let fx = base_fixture(&db).await;

    // Faculty github handle
    let err = ops::create_faculty(&db, 9099, "f1", true).await.unwrap_err();
    assert!(matches!(err, SchemaError::ConstraintViolation(_)), "{err}");

    // Faculty user reference
    let err = ops::create_faculty(&db, 9001, "f99", true).await.unwrap_err();
    assert!(matches!(err, SchemaError::ConstraintViolation(_)), "{err}");

    // Course name
    let err = ops::create_course(&db, "C1").await.unwrap_err();
    assert!(matches!(err, SchemaError::ConstraintViolation(_)), "{err}");

    // Content name
    let err = ops::create_content(&db, "Repo1", fx.faculty.id, "https://github.com/f1/other")
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::ConstraintViolation(_)), "{err}");

    // Content repository URL
    let err = ops::create_content(&db, "Other", fx.faculty.id, "https://github.com/f1/repo_1")
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::ConstraintViolation(_)), "{err}");

    // Student github handle
    let err = ops::create_student(&db, 1099, "s1", true, fx.program.id)
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::ConstraintViolation(_)), "{err}");
}

#[tokio::test]
async fn duplicate_assignment_triple_fails_with_constraint_violation() {
    let db = test_db().await;
    let fx = base_fixture(&db).await;

    let err = ops::create_assignment(
        &db,
        fx.program.id,
        fx.course.id,
        fx.content.id,
        Utc::now() + Duration::days(28),
        "Different instructions",
        "Different rubric",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchemaError::ConstraintViolation(_)), "{err}");
}

#[tokio::test]
async fn dangling_parent_references_fail_with_not_found() {
    let db = test_db().await;
    let fx = base_fixture(&db).await;

    let err = ops::create_content(&db, "Orphan", 999, "https://github.com/none/repo")
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::NotFound(_)));

    let err = ops::create_student(&db, 1098, "s98", true, 999)
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::NotFound(_)));

    let err = ops::create_assignment(
        &db,
        fx.program.id,
        999,
        fx.content.id,
        Utc::now(),
        "",
        "",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SchemaError::NotFound(_)));

    let err = ops::create_student_assignment(&db, fx.student.id, 999)
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::NotFound(_)));

    let err = ops::find_program(&db, 999).await.unwrap_err();
    assert_eq!(err.to_string(), "program 999 not found");
}

#[tokio::test]
async fn empty_required_fields_fail_with_validation_error() {
    let db = test_db().await;
    let fx = base_fixture(&db).await;

    let err = ops::create_course(&db, "  ").await.unwrap_err();
    assert!(matches!(err, SchemaError::Validation(_)));

    let err = ops::create_faculty(&db, 9050, "", true).await.unwrap_err();
    assert!(matches!(err, SchemaError::Validation(_)));

    let err = ops::create_content(&db, "NewRepo", fx.faculty.id, "")
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::Validation(_)));
}

#[tokio::test]
async fn grading_requires_a_prior_submission() {
    let db = test_db().await;
    let fx = base_fixture(&db).await;

    let row = ops::create_student_assignment(&db, fx.student.id, fx.assignment.id)
        .await
        .unwrap();

    let err = ops::grade_submission(&db, row.id, Decimal::new(7000, 2), fx.faculty.id, None)
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::Validation(_)));

    ops::submit_assignment(&db, row.id, Utc::now()).await.unwrap();
    let graded = ops::grade_submission(
        &db,
        row.id,
        Decimal::new(7000, 2),
        fx.faculty.id,
        Some("See comments".into()),
    )
    .await
    .unwrap();

    assert_eq!(graded.grade, Some(Decimal::new(7000, 2)));
    assert_eq!(graded.reviewer_id, Some(fx.faculty.id));
    assert!(graded.reviewed.is_some());
    assert_eq!(graded.feedback.as_deref(), Some("See comments"));
    assert!(graded.updated_at >= graded.created_at);
}

#[tokio::test]
async fn grading_with_unknown_reviewer_fails_with_not_found() {
    let db = test_db().await;
    let fx = base_fixture(&db).await;

    let row = ops::create_student_assignment(&db, fx.student.id, fx.assignment.id)
        .await
        .unwrap();
    ops::submit_assignment(&db, row.id, Utc::now()).await.unwrap();

    let err = ops::grade_submission(&db, row.id, Decimal::new(7000, 2), 999, None)
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::NotFound(_)));
}

#[tokio::test]
async fn deleting_an_assignment_cascades_to_its_submissions() {
    let db = test_db().await;
    let fx = base_fixture(&db).await;

    ops::create_student_assignment(&db, fx.student.id, fx.assignment.id)
        .await
        .unwrap();
    ops::create_student_assignment(&db, fx.student.id, fx.assignment.id)
        .await
        .unwrap();

    ops::delete_assignment(&db, fx.assignment.id).await.unwrap();

    assert_eq!(assignment::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(
        student_assignment::Entity::find().count(&db).await.unwrap(),
        0
    );

    let err = ops::delete_assignment(&db, fx.assignment.id)
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::NotFound(_)));
}

#[tokio::test]
async fn deleting_a_course_cascades_through_assignments() {
    let db = test_db().await;
    let fx = base_fixture(&db).await;

    ops::create_student_assignment(&db, fx.student.id, fx.assignment.id)
        .await
        .unwrap();

    ops::delete_course(&db, fx.course.id).await.unwrap();

    assert_eq!(assignment::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(
        student_assignment::Entity::find().count(&db).await.unwrap(),
        0
    );
    // The content row survives; only the assignment edge is gone.
    ops::find_content(&db, fx.content.id).await.unwrap();
}

#[tokio::test]
async fn deleting_a_program_is_blocked_by_enrolled_students() {
    let db = test_db().await;
    let fx = base_fixture(&db).await;

    let err = ops::delete_program(&db, fx.program.id).await.unwrap_err();
    assert!(matches!(err, SchemaError::ConstraintViolation(_)), "{err}");

    ops::delete_student(&db, fx.student.id).await.unwrap();
    ops::delete_program(&db, fx.program.id).await.unwrap();

    // The program's assignments went with it.
    assert_eq!(assignment::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn deleting_referenced_content_is_blocked() {
    let db = test_db().await;
    let fx = base_fixture(&db).await;

    let err = ops::delete_content(&db, fx.content.id).await.unwrap_err();
    assert!(matches!(err, SchemaError::ConstraintViolation(_)), "{err}");

    ops::delete_assignment(&db, fx.assignment.id).await.unwrap();
    ops::delete_content(&db, fx.content.id).await.unwrap();
}

#[tokio::test]
async fn deleting_a_referenced_faculty_member_is_blocked() {
    let db = test_db().await;
    let fx = base_fixture(&db).await;

    // Blocked by owned content.
    let err = ops::delete_faculty(&db, fx.faculty.id).await.unwrap_err();
    assert!(matches!(err, SchemaError::ConstraintViolation(_)), "{err}");

    // Blocked by a review even with the content gone.
    let row = ops::create_student_assignment(&db, fx.student.id, fx.assignment.id)
        .await
        .unwrap();
    ops::submit_assignment(&db, row.id, Utc::now()).await.unwrap();
    ops::grade_submission(&db, row.id, Decimal::new(8000, 2), fx.faculty.id, None)
        .await
        .unwrap();

    ops::delete_assignment(&db, fx.assignment.id).await.unwrap();
    ops::delete_content(&db, fx.content.id).await.unwrap();

    let err = ops::delete_faculty(&db, fx.faculty.id).await.unwrap_err();
    assert!(matches!(err, SchemaError::ConstraintViolation(_)), "{err}");
}

#[tokio::test]
async fn example_scenario_classifies_a_submitted_ungraded_row() {
    let db = test_db().await;
    let fx = base_fixture(&db).await;

    let row = ops::create_student_assignment(&db, fx.student.id, fx.assignment.id)
        .await
        .unwrap();
    ops::submit_assignment(&db, row.id, Utc::now() - Duration::days(1))
        .await
        .unwrap();

    let not_submitted = fx
        .student
        .assignments_not_submitted(&db, None)
        .await
        .unwrap();
    assert!(not_submitted.iter().all(|s| s.id != row.id));

    let submitted = fx.student.assignments_submitted(&db, None).await.unwrap();
    assert!(submitted.iter().any(|s| s.id == row.id));

    assert!(fx.student.assignments_graded(&db, None).await.unwrap().is_empty());
}
