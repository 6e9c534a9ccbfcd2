//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgGolfCourseRepository`] - Golf course aggregate storage (courses + holes)

pub mod pg_golf_course_repository;

pub use pg_golf_course_repository::PgGolfCourseRepository;
