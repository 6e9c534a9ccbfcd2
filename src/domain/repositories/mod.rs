//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod golf_course_repository;

pub use golf_course_repository::{CourseFilter, CoursePage, GolfCourseRepository};

#[cfg(test)]
pub use golf_course_repository::MockGolfCourseRepository;
