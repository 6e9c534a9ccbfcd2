//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod golf_courses;
pub mod health;
pub mod holes;

pub use golf_courses::{
    course_stats_handler, create_course_handler, delete_course_handler, get_course_handler,
    list_courses_handler, search_courses_handler, update_course_handler,
};
pub use health::{fallback_handler, health_handler, method_not_allowed_handler, root_handler};
pub use holes::{get_hole_handler, list_holes_handler};
