mod common;

use std::collections::HashSet;

use sea_orm::{EntityTrait, PaginatorTrait};

use common::test_db;
use voyage_schema::entity::{
    assignment, content, course, faculty, program, student, student_assignment,
};
use voyage_schema::seed;

#[tokio::test]
async fn seed_all_populates_the_documented_row_counts() {
    let db = test_db().await;
    seed::seed_all(&db).await.unwrap();

    assert_eq!(faculty::Entity::find().count(&db).await.unwrap(), 5);
    assert_eq!(program::Entity::find().count(&db).await.unwrap(), 3);
    assert_eq!(course::Entity::find().count(&db).await.unwrap(), 3);
    assert_eq!(content::Entity::find().count(&db).await.unwrap(), 28);
    assert_eq!(student::Entity::find().count(&db).await.unwrap(), 10);
    assert_eq!(
        student_assignment::Entity::find().count(&db).await.unwrap(),
        10
    );

    // Duplicate random triples are skipped, so anywhere from 1 to 5 land.
    let assignments = assignment::Entity::find().all(&db).await.unwrap();
    assert!((1..=5).contains(&assignments.len()));

    let triples: HashSet<(i32, i32, i32)> = assignments
        .iter()
        .map(|a| (a.program_id, a.course_id, a.content_id))
        .collect();
    assert_eq!(triples.len(), assignments.len());
}

#[tokio::test]
async fn seeding_twice_changes_nothing() {
    let db = test_db().await;
    seed::seed_all(&db).await.unwrap();

    let assignments_before = assignment::Entity::find().count(&db).await.unwrap();
    seed::seed_all(&db).await.unwrap();

    assert_eq!(faculty::Entity::find().count(&db).await.unwrap(), 5);
    assert_eq!(content::Entity::find().count(&db).await.unwrap(), 28);
    assert_eq!(
        assignment::Entity::find().count(&db).await.unwrap(),
        assignments_before
    );
    assert_eq!(
        student_assignment::Entity::find().count(&db).await.unwrap(),
        10
    );
}

#[tokio::test]
async fn seeded_references_resolve() {
    let db = test_db().await;
    seed::seed_all(&db).await.unwrap();

    let faculty_ids: HashSet<i32> = faculty::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .iter()
        .map(|f| f.id)
        .collect();

    for row in content::Entity::find().all(&db).await.unwrap() {
        assert!(faculty_ids.contains(&row.faculty_id));
        assert!(row.repo.starts_with("https://github.com/"));
    }

    for row in student_assignment::Entity::find().all(&db).await.unwrap() {
        assert!(row.submitted.is_some());
        if let Some(reviewer) = row.reviewer_id {
            assert!(faculty_ids.contains(&reviewer));
        }
    }
}
