mod common;

use golf_course_api::domain::entities::{CoursePatch, Difficulty, Hole};
use golf_course_api::domain::repositories::{CourseFilter, GolfCourseRepository};
use golf_course_api::error::AppError;
use golf_course_api::infrastructure::persistence::PgGolfCourseRepository;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

fn repo(pool: &PgPool) -> PgGolfCourseRepository {
    PgGolfCourseRepository::new(Arc::new(pool.clone()))
}

async fn hole_count(pool: &PgPool, id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM holes WHERE golf_course_id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

// ─── CREATE / FIND ───────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_and_find_course(pool: PgPool) {
    let repo = repo(&pool);
    let mut new_course = common::new_course("Old Course", "St Andrews", "Scotland", 18);
    new_course.difficulty = Some(Difficulty::Championship);
    new_course.description = Some("Home of golf".to_string());
    new_course.is_active = false;
    let id = new_course.id.unwrap();

    let created = repo.create(new_course.clone()).await.unwrap();
    assert_eq!(created.id, id);
    assert_eq!(created.holes.len(), 18);

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.name, new_course.name);
    assert_eq!(found.location, new_course.location);
    assert_eq!(found.country, new_course.country);
    assert_eq!(found.total_holes, new_course.total_holes);
    assert_eq!(found.holes, new_course.holes);
    assert_eq!(found.description, new_course.description);
    assert_eq!(found.difficulty, new_course.difficulty);
    assert_eq!(found.is_active, new_course.is_active);
    assert!(found.holes.windows(2).all(|w| w[0].hole_number < w[1].hole_number));
}

#[sqlx::test]
async fn test_find_missing_course(pool: PgPool) {
    let found = repo(&pool).find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn test_create_duplicate_name_location_is_conflict(pool: PgPool) {
    let repo = repo(&pool);
    repo.create(common::new_course("Old Course", "St Andrews", "Scotland", 18))
        .await
        .unwrap();

    let result = repo
        .create(common::new_course("OLD COURSE", "st andrews", "Scotland", 18))
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_create_duplicate_id_is_conflict_and_leaves_no_holes(pool: PgPool) {
    let repo = repo(&pool);
    let first = common::new_course("Course A", "Here", "Scotland", 9);
    let id = first.id.unwrap();
    repo.create(first).await.unwrap();

    let mut second = common::new_course("Course B", "There", "Scotland", 18);
    second.id = Some(id);
    let result = repo.create(second).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    assert_eq!(hole_count(&pool, id).await, 9);
}

// ─── LIST / SEARCH ───────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_orders_by_name_and_counts_all(pool: PgPool) {
    let repo = repo(&pool);
    for name in ["Carnoustie", "Augusta", "Birkdale"] {
        repo.create(common::new_course(name, name, "Scotland", 18))
            .await
            .unwrap();
    }

    let page = repo.list(CourseFilter::new(0, 2)).await.unwrap();

    assert_eq!(page.total, 3);
    let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Augusta", "Birkdale"]);
    assert_eq!(page.items[0].holes.len(), 18);

    let page = repo.list(CourseFilter::new(2, 2)).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Carnoustie");
}

#[sqlx::test]
async fn test_list_filters(pool: PgPool) {
    let repo = repo(&pool);
    let mut hard = common::new_course("Royal Dornoch", "Dornoch", "Scotland", 18);
    hard.difficulty = Some(Difficulty::Hard);
    repo.create(hard).await.unwrap();

    let mut inactive = common::new_course("Ballybunion", "Kerry", "Ireland", 9);
    inactive.is_active = false;
    repo.create(inactive).await.unwrap();

    repo.create(common::new_course("Lahinch", "Clare", "Ireland", 18))
        .await
        .unwrap();

    let by_country = repo
        .list(CourseFilter::new(0, 10).with_country(Some("ireland".to_string())))
        .await
        .unwrap();
    assert_eq!(by_country.total, 2);

    let by_difficulty = repo
        .list(CourseFilter::new(0, 10).with_difficulty(Some(Difficulty::Hard)))
        .await
        .unwrap();
    assert_eq!(by_difficulty.total, 1);
    assert_eq!(by_difficulty.items[0].name, "Royal Dornoch");

    let active = repo
        .list(CourseFilter::new(0, 10).with_active(Some(true)))
        .await
        .unwrap();
    assert_eq!(active.total, 2);

    let nine_holes = repo
        .list(CourseFilter::new(0, 10).with_hole_range(None, Some(9)))
        .await
        .unwrap();
    assert_eq!(nine_holes.total, 1);
    assert_eq!(nine_holes.items[0].name, "Ballybunion");

    let searched = repo
        .list(CourseFilter::new(0, 10).with_search(Some("CLARE".to_string())))
        .await
        .unwrap();
    assert_eq!(searched.total, 1);
    assert_eq!(searched.items[0].name, "Lahinch");
}

#[sqlx::test]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    let repo = repo(&pool);
    repo.create(common::new_course("100% Links", "Fife", "Scotland", 9))
        .await
        .unwrap();
    repo.create(common::new_course("Parkland", "Fife", "Scotland", 9))
        .await
        .unwrap();

    let found = repo.search("0%", 50).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "100% Links");

    let found = repo.search("fife", 1).await.unwrap();
    assert_eq!(found.len(), 1);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_scalar_fields_keeps_holes(pool: PgPool) {
    let repo = repo(&pool);
    let mut new_course = common::new_course("Muirfield", "Gullane", "Scotland", 18);
    new_course.description = Some("Honourable Company".to_string());
    let created = repo.create(new_course).await.unwrap();

    let patch = CoursePatch {
        name: Some("Muirfield Links".to_string()),
        description: Some(None),
        ..Default::default()
    };
    let updated = repo.update(created.id, patch).await.unwrap().unwrap();

    assert_eq!(updated.name, "Muirfield Links");
    assert_eq!(updated.location, "Gullane");
    assert_eq!(updated.description, None);
    assert_eq!(updated.holes, created.holes);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test]
async fn test_update_replaces_holes(pool: PgPool) {
    let repo = repo(&pool);
    let created = repo
        .create(common::new_course("Turnberry", "Ayrshire", "Scotland", 18))
        .await
        .unwrap();

    let patch = CoursePatch {
        total_holes: Some(9),
        holes: Some(common::holes(9)),
        ..Default::default()
    };
    let updated = repo.update(created.id, patch).await.unwrap().unwrap();

    assert_eq!(updated.total_holes, 9);
    assert_eq!(updated.holes.len(), 9);
    assert_eq!(hole_count(&pool, created.id).await, 9);
}

#[sqlx::test]
async fn test_update_with_mismatched_layout_changes_nothing(pool: PgPool) {
    let repo = repo(&pool);
    let created = repo
        .create(common::new_course("Troon", "Ayrshire", "Scotland", 18))
        .await
        .unwrap();

    let patch = CoursePatch {
        name: Some("Royal Troon".to_string()),
        total_holes: Some(9),
        ..Default::default()
    };
    let result = repo.update(created.id, patch).await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Troon");
    assert_eq!(stored.total_holes, 18);
}

#[sqlx::test]
async fn test_update_duplicate_hole_numbers_rejected(pool: PgPool) {
    let repo = repo(&pool);
    let created = repo
        .create(common::new_course("Prestwick", "Ayrshire", "Scotland", 9))
        .await
        .unwrap();

    let mut holes = common::holes(9);
    holes[8] = Hole::new(1, 4, 300, 9);
    let patch = CoursePatch {
        holes: Some(holes),
        ..Default::default()
    };

    let result = repo.update(created.id, patch).await;
    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(hole_count(&pool, created.id).await, 9);
}

#[sqlx::test]
async fn test_empty_update_returns_stored_course(pool: PgPool) {
    let repo = repo(&pool);
    let created = repo
        .create(common::new_course("Kingsbarns", "Fife", "Scotland", 18))
        .await
        .unwrap();

    let same = repo
        .update(created.id, CoursePatch::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(same, created);
}

#[sqlx::test]
async fn test_update_missing_course(pool: PgPool) {
    let result = repo(&pool)
        .update(Uuid::new_v4(), CoursePatch::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

// ─── DELETE / STATS ──────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_cascades_holes(pool: PgPool) {
    let repo = repo(&pool);
    let id = common::create_test_course(&pool, "Gleneagles", "Perthshire").await;

    assert!(repo.delete(id).await.unwrap());
    assert_eq!(hole_count(&pool, id).await, 0);
    assert!(repo.find_by_id(id).await.unwrap().is_none());

    assert!(!repo.delete(id).await.unwrap());
}

#[sqlx::test]
async fn test_delete_with_rounds_is_conflict(pool: PgPool) {
    let repo = repo(&pool);
    let id = common::create_test_course(&pool, "Castle Stuart", "Inverness").await;
    common::create_test_round(&pool, id, "Tom", 78).await;

    let result = repo.delete(id).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
    assert!(repo.find_by_id(id).await.unwrap().is_some());
    assert_eq!(hole_count(&pool, id).await, 18);
}

#[sqlx::test]
async fn test_round_stats(pool: PgPool) {
    let repo = repo(&pool);
    let id = common::create_test_course(&pool, "Loch Lomond", "Luss").await;

    let empty = repo.round_stats(id).await.unwrap();
    assert_eq!(empty.total_rounds, 0);
    assert_eq!(empty.average_score, None);

    common::create_test_round(&pool, id, "Ann", 72).await;
    common::create_test_round(&pool, id, "Bob", 81).await;

    let stats = repo.round_stats(id).await.unwrap();
    assert_eq!(stats.total_rounds, 2);
    assert_eq!(stats.best_score, Some(72));
    assert_eq!(stats.worst_score, Some(81));
    assert_eq!(stats.average_score, Some(76.5));
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    assert!(repo(&pool).ping().await.is_ok());
}
