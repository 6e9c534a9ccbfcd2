mod common;

use serde_json::Value;
use sqlx::PgPool;

#[sqlx::test]
async fn test_list_holes(pool: PgPool) {
    let id = common::create_test_course(&pool, "Royal Dornoch", "Sutherland").await;
    let server = common::make_server(pool);

    let response = server
        .get(&format!("/api/v1/golf-courses/{id}/holes"))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["total"], 18);
    let holes = body["data"].as_array().unwrap();
    assert_eq!(holes.len(), 18);
    assert_eq!(holes[0]["hole_number"], 1);
    assert_eq!(holes[17]["hole_number"], 18);
    assert!(holes[0].get("par").is_some());
    assert!(holes[0].get("distance_meters").is_some());
    assert!(holes[0].get("handicap").is_some());
}

#[sqlx::test]
async fn test_list_holes_course_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .get(&format!("/api/v1/golf-courses/{}/holes", uuid::Uuid::new_v4()))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["message"], "Golf course not found");
}

#[sqlx::test]
async fn test_get_hole(pool: PgPool) {
    let id = common::create_test_course(&pool, "Royal Dornoch", "Sutherland").await;
    let server = common::make_server(pool);

    let response = server
        .get(&format!("/api/v1/golf-courses/{id}/holes/6"))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["hole_number"], 6);
    assert_eq!(body["data"]["par"], 3);
    assert_eq!(body["data"]["distance_meters"], 360);
    assert_eq!(body["data"]["handicap"], 6);
}

#[sqlx::test]
async fn test_get_hole_not_found(pool: PgPool) {
    let id = common::create_test_course(&pool, "Nine Holer", "Fife").await;
    let server = common::make_server(pool);

    server
        .put(&format!("/api/v1/golf-courses/{id}"))
        .json(&serde_json::json!({ "total_holes": 9, "holes": common::holes_json(9) }))
        .await
        .assert_status_ok();

    let response = server
        .get(&format!("/api/v1/golf-courses/{id}/holes/12"))
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["message"], "Hole not found");
}

#[sqlx::test]
async fn test_get_hole_invalid_number(pool: PgPool) {
    let id = common::create_test_course(&pool, "Royal Dornoch", "Sutherland").await;
    let server = common::make_server(pool);

    let response = server
        .get(&format!("/api/v1/golf-courses/{id}/holes/first"))
        .await;

    response.assert_status_bad_request();
}
