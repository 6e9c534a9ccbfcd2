//! Business logic services for the application layer.

pub mod golf_course_service;

pub use golf_course_service::{CourseStats, GolfCourseService};
