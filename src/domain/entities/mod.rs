//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`GolfCourse`] - A stored course with its ordered holes (the aggregate root)
//! - [`Hole`] - One hole, owned by exactly one course
//! - [`RoundStats`] - Scores aggregated over the rounds played on a course
//!
//! # Design Pattern
//!
//! Separate structs describe writes:
//! - [`NewGolfCourse`] - For creating a course together with its holes
//! - [`CoursePatch`] - For partial updates

pub mod golf_course;
pub mod hole;
pub mod round_stats;

pub use golf_course::{CoursePatch, Difficulty, GolfCourse, NewGolfCourse};
pub use hole::Hole;
pub use round_stats::RoundStats;
