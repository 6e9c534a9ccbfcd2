#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use golf_course_api::api::routes::course_routes;
use golf_course_api::domain::entities::{Hole, NewGolfCourse};
use golf_course_api::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

/// Course routes mounted under `/api/v1`, without rate limiting.
pub fn make_server(pool: PgPool) -> TestServer {
    let app = Router::new()
        .nest("/api/v1", course_routes())
        .with_state(create_test_state(pool));
    TestServer::new(app).unwrap()
}

pub fn holes(count: i32) -> Vec<Hole> {
    (1..=count)
        .map(|n| Hole::new(n, if n % 3 == 0 { 3 } else { 4 }, 300 + n * 10, n))
        .collect()
}

pub fn holes_json(count: i32) -> Value {
    json!(
        holes(count)
            .into_iter()
            .map(|h| json!({
                "hole_number": h.hole_number,
                "par": h.par,
                "distance_meters": h.distance_meters,
                "handicap": h.handicap,
            }))
            .collect::<Vec<_>>()
    )
}

pub fn course_payload(name: &str, location: &str, total_holes: i32) -> Value {
    json!({
        "name": name,
        "location": location,
        "country": "Scotland",
        "total_holes": total_holes,
        "holes": holes_json(total_holes),
        "description": "Links course",
        "difficulty": "hard"
    })
}

pub fn new_course(name: &str, location: &str, country: &str, total_holes: i32) -> NewGolfCourse {
    NewGolfCourse {
        id: Some(Uuid::new_v4()),
        name: name.to_string(),
        location: location.to_string(),
        country: country.to_string(),
        total_holes,
        holes: holes(total_holes),
        description: None,
        difficulty: None,
        is_active: true,
    }
}

pub async fn create_test_course(pool: &PgPool, name: &str, location: &str) -> Uuid {
    let state = create_test_state(pool.clone());
    state
        .golf_course_service
        .create_course(new_course(name, location, "Scotland", 18))
        .await
        .unwrap()
        .id
}

pub async fn create_test_round(pool: &PgPool, course_id: Uuid, player: &str, score: i32) {
    sqlx::query(
        "INSERT INTO golf_rounds (golf_course_id, player_name, date_played, total_score)
         VALUES ($1, $2, NOW(), $3)",
    )
    .bind(course_id)
    .bind(player)
    .bind(score)
    .execute(pool)
    .await
    .unwrap();
}
