//! API route configuration.
//!
//! Mounted under `/api/v1` by [`crate::routes::app_router`].

use crate::api::handlers::{
    course_stats_handler, create_course_handler, delete_course_handler, get_course_handler,
    get_hole_handler, list_courses_handler, list_holes_handler, method_not_allowed_handler,
    search_courses_handler, update_course_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Golf course and hole routes.
///
/// # Endpoints
///
/// - `GET    /golf-courses`                      - List courses (filtered, paginated)
/// - `POST   /golf-courses`                      - Create a course with its holes
/// - `GET    /golf-courses/search`               - Search by name, location or country
/// - `GET    /golf-courses/{id}`                 - Get a course
/// - `PUT    /golf-courses/{id}`                 - Partially update a course
/// - `DELETE /golf-courses/{id}`                 - Delete a course without rounds
/// - `GET    /golf-courses/{id}/holes`           - List holes
/// - `GET    /golf-courses/{id}/holes/{number}`  - Get one hole
/// - `GET    /golf-courses/{id}/stats`           - Par and round statistics
///
/// Unsupported methods on these paths get a 405 error envelope.
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/golf-courses",
            get(list_courses_handler).post(create_course_handler),
        )
        .route("/golf-courses/search", get(search_courses_handler))
        .route(
            "/golf-courses/{id}",
            get(get_course_handler)
                .put(update_course_handler)
                .delete(delete_course_handler),
        )
        .route("/golf-courses/{id}/holes", get(list_holes_handler))
        .route(
            "/golf-courses/{id}/holes/{hole_number}",
            get(get_hole_handler),
        )
        .route("/golf-courses/{id}/stats", get(course_stats_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
}
