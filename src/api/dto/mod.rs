//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod envelope;
pub mod golf_course;
pub mod health;
pub mod pagination;

pub use envelope::{ApiListResponse, ApiResponse, PaginationMeta};
pub use golf_course::{
    CourseItem, CourseStatsItem, CreateCourseRequest, HoleItem, HoleRequest, UpdateCourseRequest,
};
pub use pagination::{CourseListQuery, PageWindow, PaginationParams, SearchQuery};
