//! Handlers for the holes of a golf course.

use axum::{Json, extract::State};
use uuid::Uuid;

use crate::api::dto::{ApiListResponse, ApiResponse, HoleItem};
use crate::api::extract::ApiPath;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the holes of a course ordered by number.
///
/// # Endpoint
///
/// `GET /api/v1/golf-courses/{id}/holes`
///
/// # Errors
///
/// Returns 404 if the course does not exist.
pub async fn list_holes_handler(
    ApiPath(id): ApiPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<ApiListResponse<HoleItem>>, AppError> {
    let holes = state.golf_course_service.list_holes(id).await?;

    Ok(Json(ApiListResponse::ok(
        "Holes retrieved successfully",
        holes.into_iter().map(HoleItem::from).collect(),
    )))
}

/// Returns one hole of a course.
///
/// # Endpoint
///
/// `GET /api/v1/golf-courses/{id}/holes/{hole_number}`
///
/// # Errors
///
/// Returns 400 if `hole_number` is not an integer.
/// Returns 404 if the course or the hole does not exist.
pub async fn get_hole_handler(
    ApiPath((id, hole_number)): ApiPath<(Uuid, i32)>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HoleItem>>, AppError> {
    let hole = state.golf_course_service.get_hole(id, hole_number).await?;

    Ok(Json(ApiResponse::ok(
        "Hole retrieved successfully",
        HoleItem::from(hole),
    )))
}
