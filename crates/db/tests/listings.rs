//! Integration tests for listing queries and status updates.

use forum_core::project::ProjectStatus;
use forum_db::models::project::ProjectContent;
use forum_db::repositories::{ApprovedProjectRepo, SubmissionRepo};
use sqlx::PgPool;

fn content(name: &str, creator_id: i64, thumbnail: Option<Vec<u8>>) -> ProjectContent {
    ProjectContent {
        name: name.to_string(),
        description: String::new(),
        creator_id,
        creator_name: "someone".to_string(),
        thumbnail,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_status(pool: PgPool) {
    let a = ApprovedProjectRepo::create(&pool, &content("A", 1, None))
        .await
        .unwrap();
    let b = ApprovedProjectRepo::create(&pool, &content("B", 1, None))
        .await
        .unwrap();
    ApprovedProjectRepo::update_status(&pool, b.p_id, ProjectStatus::Completed)
        .await
        .unwrap()
        .unwrap();

    let ongoing = ApprovedProjectRepo::list(&pool, Some(ProjectStatus::InProgress))
        .await
        .unwrap();
    let completed = ApprovedProjectRepo::list(&pool, Some(ProjectStatus::Completed))
        .await
        .unwrap();
    let upcoming = ApprovedProjectRepo::list(&pool, Some(ProjectStatus::Upcoming))
        .await
        .unwrap();
    let all = ApprovedProjectRepo::list(&pool, None).await.unwrap();

    assert_eq!(ongoing.iter().map(|p| p.p_id).collect::<Vec<_>>(), [a.p_id]);
    assert_eq!(completed.iter().map(|p| p.p_id).collect::<Vec<_>>(), [b.p_id]);
    assert!(upcoming.is_empty());
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_status_on_missing_project(pool: PgPool) {
    let updated = ApprovedProjectRepo::update_status(&pool, 4242, ProjectStatus::Upcoming)
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_thumbnail_flag_and_bytes(pool: PgPool) {
    let with = ApprovedProjectRepo::create(&pool, &content("Pic", 1, Some(vec![1, 2, 3])))
        .await
        .unwrap();
    let without = ApprovedProjectRepo::create(&pool, &content("NoPic", 1, None))
        .await
        .unwrap();

    assert!(with.has_thumbnail);
    assert!(!without.has_thumbnail);
    assert_eq!(
        ApprovedProjectRepo::find_thumbnail(&pool, with.p_id)
            .await
            .unwrap(),
        Some(Some(vec![1, 2, 3]))
    );
    assert_eq!(
        ApprovedProjectRepo::find_thumbnail(&pool, without.p_id)
            .await
            .unwrap(),
        Some(None)
    );
    assert_eq!(
        ApprovedProjectRepo::find_thumbnail(&pool, 9999).await.unwrap(),
        None
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pending_queue_excludes_rejected(pool: PgPool) {
    let keep = SubmissionRepo::create(&pool, &content("Keep", 1, None))
        .await
        .unwrap();
    let dropped = SubmissionRepo::create(&pool, &content("Drop", 2, None))
        .await
        .unwrap();
    SubmissionRepo::reject(&pool, dropped.r_id).await.unwrap();

    let pending = SubmissionRepo::list_pending(&pool).await.unwrap();
    assert_eq!(pending.iter().map(|s| s.r_id).collect::<Vec<_>>(), [keep.r_id]);

    let mine = SubmissionRepo::list_by_creator(&pool, 2).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].status, "rejected");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_creator_lookup_spans_both_collections(pool: PgPool) {
    let sub = SubmissionRepo::create(&pool, &content("S", 11, None))
        .await
        .unwrap();
    let proj = ApprovedProjectRepo::create(&pool, &content("P", 12, None))
        .await
        .unwrap();

    assert_eq!(SubmissionRepo::find_creator(&pool, sub.r_id).await.unwrap(), Some(11));
    assert_eq!(ApprovedProjectRepo::find_creator(&pool, proj.p_id).await.unwrap(), Some(12));
    assert_eq!(ApprovedProjectRepo::find_creator(&pool, sub.r_id).await.unwrap(), None);
}
