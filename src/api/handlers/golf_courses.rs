//! Handlers for golf course endpoints.

use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::{
    ApiListResponse, ApiResponse, CourseItem, CourseListQuery, CourseStatsItem,
    CreateCourseRequest, SearchQuery, UpdateCourseRequest,
};
use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Lists golf courses with filtering and pagination.
///
/// # Endpoint
///
/// `GET /api/v1/golf-courses`
///
/// # Query Parameters
///
/// - `page` / `per_page` or `skip` / `limit` - window (default 10 per page, max 100)
/// - `search` - substring of name, location or country
/// - `country` - exact country, case-insensitive
/// - `difficulty`, `is_active`, `min_holes`, `max_holes`
///
/// # Errors
///
/// Returns 400 if a parameter is malformed or out of range.
pub async fn list_courses_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CourseListQuery>,
) -> Result<Json<ApiListResponse<CourseItem>>, AppError> {
    query.validate()?;

    let (filter, window) = query.into_filter();
    let page = state.golf_course_service.list_courses(filter).await?;

    Ok(Json(ApiListResponse::paged(
        "Golf courses retrieved successfully",
        page.items.into_iter().map(CourseItem::from).collect(),
        page.total,
        window.meta(page.total),
    )))
}

/// Searches courses by name, location or country.
///
/// # Endpoint
///
/// `GET /api/v1/golf-courses/search?q={text}&limit={n}`
///
/// # Errors
///
/// Returns 400 if `q` is missing or blank, or `limit` is outside 1..=100.
pub async fn search_courses_handler(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<ApiListResponse<CourseItem>>, AppError> {
    query.validate()?;

    let courses = state
        .golf_course_service
        .search_courses(&query.q, query.limit())
        .await?;

    Ok(Json(ApiListResponse::ok(
        "Search completed successfully",
        courses.into_iter().map(CourseItem::from).collect(),
    )))
}

/// # Endpoint
///
/// `GET /api/v1/golf-courses/{id}`
pub async fn get_course_handler(
    ApiPath(id): ApiPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CourseItem>>, AppError> {
    let course = state.golf_course_service.get_course(id).await?;

    Ok(Json(ApiResponse::ok(
        "Golf course retrieved successfully",
        CourseItem::from(course),
    )))
}

/// Creates a golf course together with its holes.
///
/// # Endpoint
///
/// `POST /api/v1/golf-courses`
///
/// # Errors
///
/// Returns 400 if a field is out of range or the holes do not match `total_holes`.
/// Returns 409 if the id or the name/location pair already exists.
pub async fn create_course_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CourseItem>>), AppError> {
    payload.validate()?;

    let course = state.golf_course_service.create_course(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Golf course created successfully",
            CourseItem::from(course),
        )),
    ))
}

/// Partially updates a golf course.
///
/// # Endpoint
///
/// `PUT /api/v1/golf-courses/{id}`
///
/// Absent fields are left unchanged. `description: null` and
/// `difficulty: null` clear the value. `holes` replaces the whole set and
/// must match the resulting `total_holes`.
///
/// # Errors
///
/// Returns 400 if the merged course is invalid.
/// Returns 404 if the course does not exist.
/// Returns 409 if the new name/location pair is taken.
pub async fn update_course_handler(
    ApiPath(id): ApiPath<Uuid>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateCourseRequest>,
) -> Result<Json<ApiResponse<CourseItem>>, AppError> {
    payload.validate()?;

    let course = state
        .golf_course_service
        .update_course(id, payload.into())
        .await?;

    Ok(Json(ApiResponse::ok(
        "Golf course updated successfully",
        CourseItem::from(course),
    )))
}

/// Deletes a golf course and its holes.
///
/// # Endpoint
///
/// `DELETE /api/v1/golf-courses/{id}`
///
/// # Errors
///
/// Returns 404 if the course does not exist.
/// Returns 409 if rounds have been recorded on the course.
pub async fn delete_course_handler(
    ApiPath(id): ApiPath<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.golf_course_service.delete_course(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Par and round statistics for a course.
///
/// # Endpoint
///
/// `GET /api/v1/golf-courses/{id}/stats`
pub async fn course_stats_handler(
    ApiPath(id): ApiPath<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CourseStatsItem>>, AppError> {
    let stats = state.golf_course_service.course_stats(id).await?;

    Ok(Json(ApiResponse::ok(
        "Golf course statistics retrieved successfully",
        CourseStatsItem::from(stats),
    )))
}
